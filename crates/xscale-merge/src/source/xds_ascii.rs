//! Single-dataset XDS_ASCII reflection files.
//!
//! Only the leading `!` header block is read; scanning stops at the first
//! line without the marker, so the reflection data itself is never touched.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use xscale_core::constants::{HEADER_MARKER, SPACE_GROUP_KEY, UNIT_CELL_KEY};
use xscale_core::errors::SourceError;
use xscale_core::types::{Record, SpaceGroup, UnitCell};

use super::RecordSource;

pub struct XdsAsciiSource;

impl XdsAsciiSource {
    pub const NAME: &'static str = "xds-ascii";
}

impl RecordSource for XdsAsciiSource {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn extensions(&self) -> &[&str] {
        &["hkl"]
    }

    fn read(&self, path: &Path) -> Result<Vec<Record>, SourceError> {
        let io_error = |source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(io_error)?;
        let (unit_cell, space_group) = parse_header(BufReader::new(file), path)?;
        let absolute = std::path::absolute(path).map_err(io_error)?;
        Ok(vec![Record::with_reflection_file(unit_cell, space_group, absolute)])
    }
}

/// Scan the header block for the cell and space group.
///
/// Later occurrences of a key replace earlier ones.
pub fn parse_header<R: BufRead>(
    mut reader: R,
    path: &Path,
) -> Result<(UnitCell, SpaceGroup), SourceError> {
    let malformed = |reason: String| SourceError::MalformedHeader {
        path: path.to_path_buf(),
        reason,
    };

    let mut unit_cell = None;
    let mut space_group = None;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| SourceError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        if read == 0 || !buf.starts_with(&[HEADER_MARKER as u8]) {
            break;
        }
        let line = String::from_utf8_lossy(&buf);

        if line.contains(UNIT_CELL_KEY) {
            let cell = parse_unit_cell(&line).map_err(malformed)?;
            if unit_cell.replace(cell).is_some() {
                tracing::warn!(path = %path.display(), "{UNIT_CELL_KEY} repeated; using the last one");
            }
        }
        if line.contains(SPACE_GROUP_KEY) {
            let group = parse_space_group(&line).map_err(malformed)?;
            if space_group.replace(group).is_some() {
                tracing::warn!(path = %path.display(), "{SPACE_GROUP_KEY} repeated; using the last one");
            }
        }
    }

    match (unit_cell, space_group) {
        (Some(cell), Some(group)) => Ok((cell, group)),
        (None, _) => Err(malformed(format!("{UNIT_CELL_KEY} not found in header"))),
        (_, None) => Err(malformed(format!("{SPACE_GROUP_KEY} not found in header"))),
    }
}

/// The cell is the last six whitespace-separated tokens on the line.
fn parse_unit_cell(line: &str) -> Result<UnitCell, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < UnitCell::LEN {
        return Err(format!(
            "{UNIT_CELL_KEY} needs {} values, line has {} tokens",
            UnitCell::LEN,
            tokens.len()
        ));
    }
    let values = tokens[tokens.len() - UnitCell::LEN..]
        .iter()
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| format!("{UNIT_CELL_KEY} value `{token}` is not a number"))
        })
        .collect::<Result<Vec<f64>, String>>()?;
    UnitCell::from_slice(&values).ok_or_else(|| format!("{UNIT_CELL_KEY} needs 6 values"))
}

/// The space group is the integer after the last `=`.
fn parse_space_group(line: &str) -> Result<SpaceGroup, String> {
    let raw = line.rsplit('=').next().unwrap_or_default().trim();
    let number = raw
        .parse::<u32>()
        .map_err(|_| format!("{SPACE_GROUP_KEY} value `{raw}` is not an integer"))?;
    SpaceGroup::new(number).ok_or_else(|| format!("{SPACE_GROUP_KEY} must be positive"))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    const HEADER: &str = "\
!FORMAT=XDS_ASCII    MERGE=FALSE    FRIEDEL'S_LAW=TRUE
!SPACE_GROUP_NUMBER=   19
!UNIT_CELL_CONSTANTS=    41.210    58.720    61.300  90.000  90.000  90.000
!NUMBER_OF_ITEMS_IN_EACH_DATA_RECORD=12
!END_OF_HEADER
     1     0     2  1.234E+03  2.1E+01
";

    fn parse(text: &str) -> Result<(UnitCell, SpaceGroup), SourceError> {
        parse_header(Cursor::new(text.as_bytes()), Path::new("XDS_ASCII.HKL"))
    }

    #[test]
    fn reads_cell_and_space_group() {
        let (cell, group) = parse(HEADER).unwrap();
        assert_eq!(cell, UnitCell::new([41.21, 58.72, 61.3, 90.0, 90.0, 90.0]));
        assert_eq!(group.number(), 19);
    }

    #[test]
    fn stops_at_first_non_header_line() {
        let text = "\
!SPACE_GROUP_NUMBER=   5
 data line breaks the header
!UNIT_CELL_CONSTANTS=    10 20 30 90 90 90
";
        let err = parse(text).unwrap_err();
        match err {
            SourceError::MalformedHeader { reason, .. } => {
                assert!(reason.contains(UNIT_CELL_KEY), "{reason}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_space_group_is_malformed() {
        let err = parse("!UNIT_CELL_CONSTANTS= 10 20 30 90 90 90\n").unwrap_err();
        match err {
            SourceError::MalformedHeader { reason, .. } => {
                assert!(reason.contains(SPACE_GROUP_KEY), "{reason}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_file_is_malformed() {
        assert!(matches!(parse(""), Err(SourceError::MalformedHeader { .. })));
    }

    #[test]
    fn non_numeric_cell_is_malformed() {
        let err = parse("!SPACE_GROUP_NUMBER= 5\n!UNIT_CELL_CONSTANTS= 10 20 thirty 90 90 90\n")
            .unwrap_err();
        assert!(matches!(err, SourceError::MalformedHeader { .. }));
    }

    #[test]
    fn last_occurrence_wins() {
        let text = "\
!SPACE_GROUP_NUMBER= 1
!UNIT_CELL_CONSTANTS= 10 20 30 90 90 90
!SPACE_GROUP_NUMBER= 4
!UNIT_CELL_CONSTANTS= 11 21 31 90 95 90
";
        let (cell, group) = parse(text).unwrap();
        assert_eq!(group.number(), 4);
        assert_eq!(cell, UnitCell::new([11.0, 21.0, 31.0, 90.0, 95.0, 90.0]));
    }

    #[test]
    fn read_records_absolute_reflection_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("XDS_ASCII.HKL");
        std::fs::write(&path, HEADER).unwrap();

        let records = XdsAsciiSource.read(&path).unwrap();
        assert_eq!(records.len(), 1);
        let reference = records[0].file_reference().path();
        assert!(reference.is_absolute());
        assert!(reference.ends_with("XDS_ASCII.HKL"));
    }
}
