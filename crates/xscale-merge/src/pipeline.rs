//! End-to-end run: artifacts in, `XSCALE.INP` and `XDSCONV.INP` out.

use std::path::PathBuf;

use xscale_core::config::XscaleConfig;
use xscale_core::errors::PipelineError;
use xscale_core::types::ResolvedPath;

use crate::aggregate::RecordAggregator;
use crate::consensus::{Consensus, ConsensusResolver, Overrides};
use crate::paths::PathResolver;
use crate::writer::{commit_all, stage_xdsconv_inp, ControlFileWriter};

/// Already-resolved arguments for one run.
#[derive(Debug, Clone)]
pub struct MergeRequest {
    /// Input artifacts in the order their records should appear.
    pub artifacts: Vec<PathBuf>,
    pub overrides: Overrides,
    /// Relative reflection paths in records are anchored here.
    pub working_dir: PathBuf,
    /// Where the control files are written. INPUT_FILE paths are relative
    /// to it, since XSCALE resolves them from the control file's directory.
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct MergeSummary {
    pub record_count: usize,
    pub consensus: Consensus,
    pub inputs: Vec<ResolvedPath>,
    pub xscale_inp: PathBuf,
    pub xdsconv_inp: PathBuf,
}

/// Run the whole pipeline.
///
/// Collection, consensus and every path are resolved before the first file
/// is created. Both control files are then staged and committed together,
/// so a failed run leaves neither of them behind.
pub fn run(request: &MergeRequest, config: &XscaleConfig) -> Result<MergeSummary, PipelineError> {
    let records = RecordAggregator::new().collect(&request.artifacts)?;

    let consensus = ConsensusResolver::new(config.consensus.effective_ranking_size())
        .resolve(&records, &request.overrides)?;

    let resolver = PathResolver::new(&request.output_dir)?.anchored_at(&request.working_dir)?;
    let inputs = resolver.resolve_all(&records)?;

    let xscale_inp = request.output_dir.join(config.output.effective_xscale_inp());
    let xdsconv_inp = request.output_dir.join(config.output.effective_xdsconv_inp());
    let staged = vec![
        ControlFileWriter::new(&config.scaling).stage(&xscale_inp, &consensus.parameters, &inputs)?,
        stage_xdsconv_inp(&xdsconv_inp)?,
    ];
    commit_all(staged)?;
    tracing::info!(path = %xscale_inp.display(), inputs = inputs.len(), "Wrote file");
    tracing::info!(path = %xdsconv_inp.display(), "Wrote file");

    Ok(MergeSummary {
        record_count: records.len(),
        consensus,
        inputs,
        xscale_inp,
        xdsconv_inp,
    })
}
