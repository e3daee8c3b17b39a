//! XscaleErrorCode trait for stable, machine-readable error tags.

/// Every error enum maps each variant to a stable code string.
pub trait XscaleErrorCode {
    /// Returns the error code string (e.g., "MALFORMED_HEADER").
    fn error_code(&self) -> &'static str;

    /// Returns the tagged error string: `[ERROR_CODE] message`.
    fn tagged(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const UNSUPPORTED_INPUT: &str = "UNSUPPORTED_INPUT";
pub const MALFORMED_HEADER: &str = "MALFORMED_HEADER";
pub const INVALID_DOCUMENT: &str = "INVALID_DOCUMENT";
pub const EMPTY_INPUT: &str = "EMPTY_INPUT";
pub const IO_ERROR: &str = "IO_ERROR";
pub const PATH_OUTSIDE_WORKING_TREE: &str = "PATH_OUTSIDE_WORKING_TREE";
pub const PATH_ERROR: &str = "PATH_ERROR";
pub const WRITE_ERROR: &str = "WRITE_ERROR";
pub const DISCOVERY_ERROR: &str = "DISCOVERY_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
