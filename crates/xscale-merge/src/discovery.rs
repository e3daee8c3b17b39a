//! Default inputs when the caller names none: the cells document if it
//! exists, otherwise every reflection file matching the glob.

use std::path::{Path, PathBuf};

use xscale_core::config::DiscoveryConfig;
use xscale_core::errors::DiscoveryError;

/// Inputs found under `root`. An empty result means there is nothing to do.
pub fn discover_inputs(root: &Path, config: &DiscoveryConfig) -> Result<Vec<PathBuf>, DiscoveryError> {
    let cells = root.join(config.effective_cells_file());
    if cells.is_file() {
        tracing::debug!(path = %cells.display(), "using cells document");
        return Ok(vec![cells]);
    }

    let pattern = config.effective_reflection_glob();
    let full_pattern = format!(
        "{}/{}",
        glob::Pattern::escape(&root.to_string_lossy()),
        pattern
    );
    let entries = glob::glob(&full_pattern).map_err(|e| DiscoveryError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;

    // Unreadable directory entries are skipped like the shell would.
    let found: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .filter(|path| path.is_file())
        .collect();
    tracing::debug!(pattern, count = found.len(), "globbed reflection files");
    Ok(found)
}
