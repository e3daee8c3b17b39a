//! Error handling for XSCALE input preparation.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod consensus_error;
pub mod discovery_error;
pub mod error_code;
pub mod path_error;
pub mod pipeline_error;
pub mod source_error;
pub mod write_error;

pub use config_error::ConfigError;
pub use consensus_error::ConsensusError;
pub use discovery_error::DiscoveryError;
pub use error_code::XscaleErrorCode;
pub use path_error::PathError;
pub use pipeline_error::PipelineError;
pub use source_error::SourceError;
pub use write_error::WriteError;
