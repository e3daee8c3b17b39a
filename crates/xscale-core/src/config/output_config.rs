//! Output file names.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_XDSCONV_INP, DEFAULT_XSCALE_INP};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// XSCALE control file name. Default: XSCALE.INP.
    pub xscale_inp: Option<String>,
    /// XDSCONV control file name. Default: XDSCONV.INP.
    pub xdsconv_inp: Option<String>,
}

impl OutputConfig {
    pub fn effective_xscale_inp(&self) -> &str {
        self.xscale_inp.as_deref().unwrap_or(DEFAULT_XSCALE_INP)
    }

    pub fn effective_xdsconv_inp(&self) -> &str {
        self.xdsconv_inp.as_deref().unwrap_or(DEFAULT_XDSCONV_INP)
    }
}
