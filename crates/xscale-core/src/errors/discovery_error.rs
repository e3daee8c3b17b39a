//! Default input discovery errors.

use super::error_code::{self, XscaleErrorCode};

/// Errors that can occur while discovering default inputs.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("Invalid discovery pattern {pattern}: {message}")]
    InvalidPattern { pattern: String, message: String },
}

impl XscaleErrorCode for DiscoveryError {
    fn error_code(&self) -> &'static str {
        error_code::DISCOVERY_ERROR
    }
}
