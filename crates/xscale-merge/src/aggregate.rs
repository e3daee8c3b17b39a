//! Collects records from every input artifact into one ordered set.

use std::path::Path;

use xscale_core::errors::SourceError;
use xscale_core::types::RecordSet;

use crate::source::SourceRegistry;

/// Reads artifacts in caller order and concatenates their records.
#[derive(Default)]
pub struct RecordAggregator {
    registry: SourceRegistry,
}

impl RecordAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect records, keeping artifact order and each document's own order.
    ///
    /// Fails with `EmptyInput` when nothing was collected, including when
    /// `artifacts` itself is empty.
    pub fn collect<P: AsRef<Path>>(&self, artifacts: &[P]) -> Result<RecordSet, SourceError> {
        let mut records = RecordSet::new();
        for artifact in artifacts {
            let path = artifact.as_ref();
            let batch = self.registry.read(path)?;
            tracing::debug!(path = %path.display(), records = batch.len(), "collected records");
            records.extend(batch);
        }

        if records.is_empty() {
            return Err(SourceError::EmptyInput {
                artifacts: artifacts.len(),
            });
        }

        tracing::info!("Loaded {} cells", records.len());
        Ok(records)
    }
}
