//! Dataset metadata types shared across the pipeline.

pub mod cell;
pub mod consensus;
pub mod record;

pub use cell::{SpaceGroup, UnitCell};
pub use consensus::{ConsensusParameters, ResolvedPath};
pub use record::{FileReference, Record, RecordSet};
