//! Input artifacts → records.
//!
//! Each supported artifact kind implements [`RecordSource`]. The
//! [`SourceRegistry`] picks one per path by extension, falling back to
//! sniffing the first line for an XDS header marker.

pub mod cells_yaml;
pub mod xds_ascii;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use xscale_core::constants::HEADER_MARKER;
use xscale_core::errors::SourceError;
use xscale_core::types::Record;

pub use cells_yaml::CellsYamlSource;
pub use xds_ascii::XdsAsciiSource;

/// Turns one input artifact into zero or more records, in artifact order.
pub trait RecordSource {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Lower-case file extensions this source claims.
    fn extensions(&self) -> &[&str];

    /// Read every record in the artifact.
    fn read(&self, path: &Path) -> Result<Vec<Record>, SourceError>;
}

/// Dispatches artifacts to the matching [`RecordSource`].
pub struct SourceRegistry {
    sources: Vec<Box<dyn RecordSource>>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self {
            sources: vec![Box::new(CellsYamlSource), Box::new(XdsAsciiSource)],
        }
    }

    /// Find the source for `path`, or fail with `UnsupportedInput`.
    pub fn source_for(&self, path: &Path) -> Result<&dyn RecordSource, SourceError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        if let Some(ext) = extension.as_deref() {
            if let Some(source) = self
                .sources
                .iter()
                .find(|s| s.extensions().contains(&ext))
            {
                return Ok(source.as_ref());
            }
        }

        // Unknown extension: an XDS_ASCII file renamed by the user still
        // starts with its header.
        if starts_with_header(path)? {
            if let Some(source) = self.sources.iter().find(|s| s.name() == XdsAsciiSource::NAME) {
                return Ok(source.as_ref());
            }
        }

        Err(SourceError::UnsupportedInput {
            path: path.to_path_buf(),
        })
    }

    /// Read `path` with whichever source claims it.
    pub fn read(&self, path: &Path) -> Result<Vec<Record>, SourceError> {
        let source = self.source_for(path)?;
        tracing::debug!(path = %path.display(), source = source.name(), "reading artifact");
        source.read(path)
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn starts_with_header(path: &Path) -> Result<bool, SourceError> {
    let file = File::open(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut first = String::new();
    // A binary file that is not valid UTF-8 is simply not a header file.
    match BufReader::new(file).read_line(&mut first) {
        Ok(_) => Ok(first.starts_with(HEADER_MARKER)),
        Err(e) if e.kind() == std::io::ErrorKind::InvalidData => Ok(false),
        Err(source) => Err(SourceError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_match_is_case_insensitive() {
        let registry = SourceRegistry::new();
        let yaml = registry.source_for(Path::new("cells.YAML")).unwrap();
        assert_eq!(yaml.name(), CellsYamlSource::NAME);
        let hkl = registry.source_for(Path::new("run1_XDS_ASCII.hkl")).unwrap();
        assert_eq!(hkl.name(), XdsAsciiSource::NAME);
        let yml = registry.source_for(Path::new("cells.yml")).unwrap();
        assert_eq!(yml.name(), CellsYamlSource::NAME);
    }

    #[test]
    fn unknown_extension_without_header_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "unit cell is roughly 10 20 30\n").unwrap();
        let err = SourceRegistry::new().source_for(&path).err().unwrap();
        assert!(matches!(err, SourceError::UnsupportedInput { .. }));
    }

    #[test]
    fn unknown_extension_with_header_is_xds_ascii() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("renamed.dat");
        std::fs::write(&path, "!FORMAT=XDS_ASCII    MERGE=FALSE\n").unwrap();
        let registry = SourceRegistry::new();
        let source = registry.source_for(&path).unwrap();
        assert_eq!(source.name(), XdsAsciiSource::NAME);
    }

    #[test]
    fn missing_file_with_unknown_extension_is_io_error() {
        let err = SourceRegistry::new()
            .source_for(Path::new("/nonexistent/input.dat"))
            .err()
            .unwrap();
        assert!(matches!(err, SourceError::Io { .. }));
    }
}
