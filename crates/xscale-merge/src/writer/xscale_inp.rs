//! The XSCALE control file (`XSCALE.INP`).

use std::fmt;
use std::io::Write;
use std::path::Path;

use xscale_core::config::ScalingConfig;
use xscale_core::errors::WriteError;
use xscale_core::types::{ConsensusParameters, ResolvedPath};

use super::{stage, StagedFile};

/// Serializes consensus parameters and input files into XSCALE's format.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlFileWriter {
    minimum_i_over_sigma: f64,
    save_correction_images: bool,
    resolution_low: f64,
    resolution_high: f64,
    merged_file: String,
}

impl ControlFileWriter {
    pub fn new(scaling: &ScalingConfig) -> Self {
        Self {
            minimum_i_over_sigma: scaling.effective_minimum_i_over_sigma(),
            save_correction_images: scaling.effective_save_correction_images(),
            resolution_low: scaling.effective_resolution_low(),
            resolution_high: scaling.effective_resolution_high(),
            merged_file: scaling.effective_merged_file().to_string(),
        }
    }

    /// Full file contents.
    pub fn render(&self, parameters: &ConsensusParameters, inputs: &[ResolvedPath]) -> String {
        ControlFile {
            writer: self,
            parameters,
            inputs,
        }
        .to_string()
    }

    /// Write the control file next to `path` without replacing it yet.
    pub fn stage(
        &self,
        path: &Path,
        parameters: &ConsensusParameters,
        inputs: &[ResolvedPath],
    ) -> Result<StagedFile, WriteError> {
        let text = self.render(parameters, inputs);
        stage(path, |w| w.write_all(text.as_bytes()))
    }
}

impl Default for ControlFileWriter {
    fn default() -> Self {
        Self::new(&ScalingConfig::default())
    }
}

struct ControlFile<'a> {
    writer: &'a ControlFileWriter,
    parameters: &'a ConsensusParameters,
    inputs: &'a [ResolvedPath],
}

impl fmt::Display for ControlFile<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.writer;
        writeln!(f, "MINIMUM_I/SIGMA= {}", w.minimum_i_over_sigma)?;
        writeln!(
            f,
            "SAVE_CORRECTION_IMAGES= {}",
            if w.save_correction_images { "TRUE" } else { "FALSE" }
        )?;
        writeln!(f)?;
        writeln!(f, "SPACE_GROUP_NUMBER= {}", self.parameters.space_group)?;
        writeln!(f, "UNIT_CELL_CONSTANTS= {}", self.parameters.unit_cell)?;
        writeln!(f)?;
        writeln!(f, "OUTPUT_FILE= {}", w.merged_file)?;
        writeln!(f)?;
        // XSCALE reads the resolution range per INPUT_FILE section, so it is
        // repeated in every block.
        for input in self.inputs {
            writeln!(f, "    INPUT_FILE= {input}")?;
            writeln!(
                f,
                "    INCLUDE_RESOLUTION_RANGE= {} {}",
                w.resolution_low, w.resolution_high
            )?;
            writeln!(f)?;
        }
        Ok(())
    }
}
