//! Default input discovery configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CELLS_FILE, DEFAULT_REFLECTION_GLOB};

/// Where to look for inputs when none are given on the command line.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Cells document preferred over globbing. Default: cells.yaml.
    pub cells_file: Option<String>,
    /// Glob for reflection files. Default: *XDS_ASCII.HKL.
    pub reflection_glob: Option<String>,
}

impl DiscoveryConfig {
    pub fn effective_cells_file(&self) -> &str {
        self.cells_file.as_deref().unwrap_or(DEFAULT_CELLS_FILE)
    }

    pub fn effective_reflection_glob(&self) -> &str {
        self.reflection_glob.as_deref().unwrap_or(DEFAULT_REFLECTION_GLOB)
    }
}
