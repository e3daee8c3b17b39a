//! Settings written into the XSCALE control file.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MERGED_FILE, DEFAULT_MIN_I_OVER_SIGMA, DEFAULT_RESOLUTION_HIGH,
    DEFAULT_RESOLUTION_LOW,
};

/// Configuration for the scaling directives.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScalingConfig {
    /// MINIMUM_I/SIGMA. Default: 2.
    pub minimum_i_over_sigma: Option<f64>,
    /// SAVE_CORRECTION_IMAGES. Default: false, so XSCALE does not litter the
    /// working directory with correction images.
    pub save_correction_images: Option<bool>,
    /// Low-resolution limit of INCLUDE_RESOLUTION_RANGE. Default: 20.
    pub resolution_low: Option<f64>,
    /// High-resolution limit of INCLUDE_RESOLUTION_RANGE. Default: 0.8.
    pub resolution_high: Option<f64>,
    /// OUTPUT_FILE written by XSCALE. Default: MERGED.HKL.
    pub merged_file: Option<String>,
}

impl ScalingConfig {
    pub fn effective_minimum_i_over_sigma(&self) -> f64 {
        self.minimum_i_over_sigma.unwrap_or(DEFAULT_MIN_I_OVER_SIGMA)
    }

    pub fn effective_save_correction_images(&self) -> bool {
        self.save_correction_images.unwrap_or(false)
    }

    pub fn effective_resolution_low(&self) -> f64 {
        self.resolution_low.unwrap_or(DEFAULT_RESOLUTION_LOW)
    }

    pub fn effective_resolution_high(&self) -> f64 {
        self.resolution_high.unwrap_or(DEFAULT_RESOLUTION_HIGH)
    }

    pub fn effective_merged_file(&self) -> &str {
        self.merged_file.as_deref().unwrap_or(DEFAULT_MERGED_FILE)
    }
}
