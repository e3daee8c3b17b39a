//! Input artifact errors.

use std::path::PathBuf;

use super::error_code::{self, XscaleErrorCode};

/// Errors that can occur while reading input artifacts into records.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Neither a cells document (a YAML sequence) nor an XDS_ASCII file.
    #[error("Unsupported input: {path} is neither a cells document nor an XDS_ASCII file")]
    UnsupportedInput { path: PathBuf },

    #[error("Malformed XDS_ASCII header in {path}: {reason}")]
    MalformedHeader { path: PathBuf, reason: String },

    /// A cells sequence with an entry of the wrong shape.
    #[error("Invalid cells document {path}: {message}")]
    InvalidDocument { path: PathBuf, message: String },

    #[error("No records found in {artifacts} input artifact(s)")]
    EmptyInput { artifacts: usize },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl XscaleErrorCode for SourceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedInput { .. } => error_code::UNSUPPORTED_INPUT,
            Self::MalformedHeader { .. } => error_code::MALFORMED_HEADER,
            Self::InvalidDocument { .. } => error_code::INVALID_DOCUMENT,
            Self::EmptyInput { .. } => error_code::EMPTY_INPUT,
            Self::Io { .. } => error_code::IO_ERROR,
        }
    }
}
