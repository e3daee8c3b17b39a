//! Control file write errors.

use std::path::PathBuf;

use super::error_code::{self, XscaleErrorCode};

/// Errors that can occur while writing a control file.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("IO error writing {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl XscaleErrorCode for WriteError {
    fn error_code(&self) -> &'static str {
        error_code::WRITE_ERROR
    }
}
