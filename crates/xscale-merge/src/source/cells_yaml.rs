//! Multi-record cells documents (`cells.yaml`).

use std::path::Path;

use serde_yaml::Value;
use xscale_core::errors::SourceError;
use xscale_core::types::Record;

use super::RecordSource;

/// Reads a YAML sequence of record mappings. Each mapping carries
/// `unit_cell`, `space_group`, and either `xds_ascii` or `directory`.
pub struct CellsYamlSource;

impl CellsYamlSource {
    pub const NAME: &'static str = "cells-yaml";

    /// Decode records from document text. `path` is only used in errors.
    ///
    /// Text that is not YAML, or whose top level is not a sequence, is not a
    /// cells document at all and fails with `UnsupportedInput`. A sequence
    /// with a bad entry fails with `InvalidDocument`.
    pub fn parse(content: &str, path: &Path) -> Result<Vec<Record>, SourceError> {
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let unsupported = |reason: &str| {
            tracing::debug!(path = %path.display(), reason, "not a cells document");
            SourceError::UnsupportedInput {
                path: path.to_path_buf(),
            }
        };

        let document: Value =
            serde_yaml::from_str(content).map_err(|e| unsupported(&e.to_string()))?;
        match document {
            // A document holding only `~` decodes to null.
            Value::Null => Ok(Vec::new()),
            Value::Sequence(_) => {
                serde_yaml::from_value(document).map_err(|e| SourceError::InvalidDocument {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }
            _ => Err(unsupported("top level is not a sequence")),
        }
    }
}

impl RecordSource for CellsYamlSource {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }

    fn read(&self, path: &Path) -> Result<Vec<Record>, SourceError> {
        let content = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }
}
