//! Core types, errors, configuration, tracing, and constants shared by the
//! XSCALE input preparation crates.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::XscaleConfig;
pub use types::{
    ConsensusParameters, FileReference, Record, RecordSet, ResolvedPath, SpaceGroup, UnitCell,
};
