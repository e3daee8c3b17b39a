//! Resolved outputs of the pipeline: consensus parameters and relative paths.

use std::fmt;

use super::cell::{SpaceGroup, UnitCell};

/// Unit cell and space group written into the control file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsensusParameters {
    pub unit_cell: UnitCell,
    pub space_group: SpaceGroup,
}

/// A reflection file path relative to the working directory, always
/// `/`-separated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedPath(String);

impl ResolvedPath {
    /// Wrap an already relative, `/`-separated path.
    pub fn new(posix: impl Into<String>) -> Self {
        Self(posix.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResolvedPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
