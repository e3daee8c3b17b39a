//! Configuration system.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod consensus_config;
pub mod discovery_config;
pub mod output_config;
pub mod scaling_config;
pub mod xscale_config;

pub use consensus_config::ConsensusConfig;
pub use discovery_config::DiscoveryConfig;
pub use output_config::OutputConfig;
pub use scaling_config::ScalingConfig;
pub use xscale_config::{CliOverrides, XscaleConfig};
