//! Prepares XSCALE input from independently processed XDS datasets.
//!
//! Records flow through the pipeline in collection order:
//! [`source`] → [`aggregate`] → [`consensus`] + [`paths`] → [`writer`].

pub mod aggregate;
pub mod consensus;
pub mod discovery;
pub mod paths;
pub mod pipeline;
pub mod source;
pub mod writer;

pub use aggregate::RecordAggregator;
pub use consensus::{Consensus, ConsensusResolver, Overrides, SpaceGroupCount};
pub use paths::PathResolver;
pub use pipeline::{run, MergeRequest, MergeSummary};
pub use writer::ControlFileWriter;
