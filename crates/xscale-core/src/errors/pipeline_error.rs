//! Pipeline errors.

use super::error_code::XscaleErrorCode;
use super::{ConfigError, ConsensusError, DiscoveryError, PathError, SourceError, WriteError};

/// Errors that can occur during a full run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Consensus error: {0}")]
    Consensus(#[from] ConsensusError),

    #[error("Path error: {0}")]
    Path(#[from] PathError),

    #[error("Write error: {0}")]
    Write(#[from] WriteError),

    #[error("Discovery error: {0}")]
    Discovery(#[from] DiscoveryError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl PipelineError {
    /// True when the run had no records to work with. Callers treat this as a
    /// clean no-op rather than a failure.
    pub fn is_nothing_to_do(&self) -> bool {
        matches!(
            self,
            Self::Source(SourceError::EmptyInput { .. })
                | Self::Consensus(ConsensusError::EmptyRecordSet)
        )
    }
}

impl XscaleErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Source(e) => e.error_code(),
            Self::Consensus(e) => e.error_code(),
            Self::Path(e) => e.error_code(),
            Self::Write(e) => e.error_code(),
            Self::Discovery(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
