//! Top-level configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ConsensusConfig, DiscoveryConfig, OutputConfig, ScalingConfig};
use crate::errors::ConfigError;

/// Project config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "xscale.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`XSCALE_*`)
/// 3. Project config (`xscale.toml` in the working directory)
/// 4. User config (`~/.xscale/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct XscaleConfig {
    pub scaling: ScalingConfig,
    pub output: OutputConfig,
    pub discovery: DiscoveryConfig,
    pub consensus: ConsensusConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub minimum_i_over_sigma: Option<f64>,
    pub resolution_low: Option<f64>,
    pub resolution_high: Option<f64>,
    pub ranking_size: Option<usize>,
}

impl XscaleConfig {
    /// Load configuration with layered resolution rooted at `root`.
    ///
    /// `explicit` replaces the project config lookup when given; a missing
    /// explicit file is an error, a missing `xscale.toml` is not.
    pub fn load(
        root: &Path,
        explicit: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                Self::merge_toml_file(&mut config, &user_config_path)?;
            }
        }

        // Layer 3: project config
        match explicit {
            Some(path) => Self::merge_toml_file(&mut config, path)?,
            None => {
                let project_config_path = root.join(PROJECT_CONFIG_FILE);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &XscaleConfig) -> Result<(), ConfigError> {
        let scaling = &config.scaling;
        if scaling.effective_minimum_i_over_sigma() < 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "scaling.minimum_i_over_sigma".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        let (low, high) = (
            scaling.effective_resolution_low(),
            scaling.effective_resolution_high(),
        );
        if !(high > 0.0) {
            return Err(ConfigError::ValidationFailed {
                field: "scaling.resolution_high".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if !(low > high) {
            return Err(ConfigError::ValidationFailed {
                field: "scaling.resolution_low".to_string(),
                message: format!("must be greater than resolution_high ({high})"),
            });
        }
        if config.consensus.effective_ranking_size() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "consensus.ranking_size".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        for (field, value) in [
            ("scaling.merged_file", scaling.effective_merged_file()),
            ("output.xscale_inp", config.output.effective_xscale_inp()),
            ("output.xdsconv_inp", config.output.effective_xdsconv_inp()),
            ("discovery.cells_file", config.discovery.effective_cells_file()),
            ("discovery.reflection_glob", config.discovery.effective_reflection_glob()),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.xscale/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".xscale").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut XscaleConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: XscaleConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!(path = %path.display(), "merged config file");
        Self::merge(config, file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut XscaleConfig, other: XscaleConfig) {
        // Scaling
        if other.scaling.minimum_i_over_sigma.is_some() {
            base.scaling.minimum_i_over_sigma = other.scaling.minimum_i_over_sigma;
        }
        if other.scaling.save_correction_images.is_some() {
            base.scaling.save_correction_images = other.scaling.save_correction_images;
        }
        if other.scaling.resolution_low.is_some() {
            base.scaling.resolution_low = other.scaling.resolution_low;
        }
        if other.scaling.resolution_high.is_some() {
            base.scaling.resolution_high = other.scaling.resolution_high;
        }
        if other.scaling.merged_file.is_some() {
            base.scaling.merged_file = other.scaling.merged_file;
        }

        // Output
        if other.output.xscale_inp.is_some() {
            base.output.xscale_inp = other.output.xscale_inp;
        }
        if other.output.xdsconv_inp.is_some() {
            base.output.xdsconv_inp = other.output.xdsconv_inp;
        }

        // Discovery
        if other.discovery.cells_file.is_some() {
            base.discovery.cells_file = other.discovery.cells_file;
        }
        if other.discovery.reflection_glob.is_some() {
            base.discovery.reflection_glob = other.discovery.reflection_glob;
        }

        // Consensus
        if other.consensus.ranking_size.is_some() {
            base.consensus.ranking_size = other.consensus.ranking_size;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `XSCALE_RESOLUTION_HIGH`, `XSCALE_RANKING_SIZE`, etc.
    fn apply_env_overrides(config: &mut XscaleConfig) -> Result<(), ConfigError> {
        if let Some(v) = env_value::<f64>("XSCALE_MIN_I_OVER_SIGMA")? {
            config.scaling.minimum_i_over_sigma = Some(v);
        }
        if let Some(v) = env_value::<f64>("XSCALE_RESOLUTION_LOW")? {
            config.scaling.resolution_low = Some(v);
        }
        if let Some(v) = env_value::<f64>("XSCALE_RESOLUTION_HIGH")? {
            config.scaling.resolution_high = Some(v);
        }
        if let Some(v) = env_value::<usize>("XSCALE_RANKING_SIZE")? {
            config.consensus.ranking_size = Some(v);
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut XscaleConfig, cli: &CliOverrides) {
        if let Some(v) = cli.minimum_i_over_sigma {
            config.scaling.minimum_i_over_sigma = Some(v);
        }
        if let Some(v) = cli.resolution_low {
            config.scaling.resolution_low = Some(v);
        }
        if let Some(v) = cli.resolution_high {
            config.scaling.resolution_high = Some(v);
        }
        if let Some(v) = cli.ranking_size {
            config.consensus.ranking_size = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Read and parse an environment variable; unset means `None`, unparsable
/// means `InvalidValue`.
fn env_value<T: std::str::FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                field: key.to_string(),
                message: format!("cannot parse `{raw}`"),
            }),
        Err(_) => Ok(None),
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
