//! Consensus errors.

use super::error_code::{self, XscaleErrorCode};

/// Errors that can occur while resolving consensus parameters.
#[derive(Debug, thiserror::Error)]
pub enum ConsensusError {
    #[error("Cannot resolve consensus over an empty record set")]
    EmptyRecordSet,
}

impl XscaleErrorCode for ConsensusError {
    fn error_code(&self) -> &'static str {
        error_code::EMPTY_INPUT
    }
}
