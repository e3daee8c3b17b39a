//! Path resolution errors.

use std::path::PathBuf;

use super::error_code::{self, XscaleErrorCode};

/// Errors that can occur while expressing reflection paths relative to the
/// working directory.
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("{path} cannot be expressed relative to {working_dir}")]
    PathOutsideWorkingTree { path: PathBuf, working_dir: PathBuf },

    #[error("Path is not valid UTF-8: {path}")]
    NotUnicode { path: PathBuf },

    #[error("Working directory unavailable: {source}")]
    WorkingDirUnavailable { source: std::io::Error },
}

impl XscaleErrorCode for PathError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::PathOutsideWorkingTree { .. } => error_code::PATH_OUTSIDE_WORKING_TREE,
            Self::NotUnicode { .. } => error_code::PATH_ERROR,
            Self::WorkingDirUnavailable { .. } => error_code::IO_ERROR,
        }
    }
}
