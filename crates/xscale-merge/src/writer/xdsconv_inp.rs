//! Companion XDSCONV control file, converting the merged reflections to
//! SHELX format. The text is fixed.

use std::io::Write;
use std::path::Path;

use xscale_core::errors::WriteError;

use super::{stage, StagedFile};

pub const XDSCONV_TEMPLATE: &str = concat!(
    "\n",
    "INPUT_FILE= MERGED.HKL\n",
    "INCLUDE_RESOLUTION_RANGE= 20 0.8 ! optional \n",
    "OUTPUT_FILE= shelx.hkl  SHELX    ! Warning: do _not_ name this file \"temp.mtz\" !\n",
    "FRIEDEL'S_LAW= FALSE             ! default is FRIEDEL'S_LAW=TRUE\n",
);

pub fn stage_xdsconv_inp(path: &Path) -> Result<StagedFile, WriteError> {
    stage(path, |w| w.write_all(XDSCONV_TEMPLATE.as_bytes()))
}
