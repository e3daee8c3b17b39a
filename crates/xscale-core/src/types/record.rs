//! Per-dataset records and the ordered set they are collected into.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::cell::{SpaceGroup, UnitCell};
use crate::constants::XDS_ASCII_FILENAME;

/// Where a dataset's reflection file lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileReference {
    /// Explicit path to the reflection file.
    ReflectionFile(PathBuf),
    /// Processing directory holding an `XDS_ASCII.HKL`.
    Directory(PathBuf),
}

impl FileReference {
    /// Path of the reflection file, possibly still relative.
    pub fn reflection_path(&self) -> PathBuf {
        match self {
            Self::ReflectionFile(path) => path.clone(),
            Self::Directory(dir) => dir.join(XDS_ASCII_FILENAME),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::ReflectionFile(path) | Self::Directory(path) => path,
        }
    }
}

/// One dataset's metadata.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RecordDocument")]
pub struct Record {
    unit_cell: UnitCell,
    space_group: SpaceGroup,
    file_reference: FileReference,
}

impl Record {
    pub fn new(unit_cell: UnitCell, space_group: SpaceGroup, file_reference: FileReference) -> Self {
        Self {
            unit_cell,
            space_group,
            file_reference,
        }
    }

    pub fn with_reflection_file(
        unit_cell: UnitCell,
        space_group: SpaceGroup,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self::new(unit_cell, space_group, FileReference::ReflectionFile(path.into()))
    }

    pub fn in_directory(unit_cell: UnitCell, space_group: SpaceGroup, dir: impl Into<PathBuf>) -> Self {
        Self::new(unit_cell, space_group, FileReference::Directory(dir.into()))
    }

    pub fn unit_cell(&self) -> &UnitCell {
        &self.unit_cell
    }

    pub fn space_group(&self) -> SpaceGroup {
        self.space_group
    }

    pub fn file_reference(&self) -> &FileReference {
        &self.file_reference
    }
}

/// Mapping shape of one entry in a cells document. Unknown keys are ignored.
#[derive(Debug, Deserialize)]
struct RecordDocument {
    unit_cell: UnitCell,
    space_group: SpaceGroup,
    #[serde(default)]
    xds_ascii: Option<PathBuf>,
    #[serde(default)]
    directory: Option<PathBuf>,
}

impl TryFrom<RecordDocument> for Record {
    type Error = String;

    fn try_from(doc: RecordDocument) -> Result<Self, Self::Error> {
        let file_reference = match (doc.xds_ascii, doc.directory) {
            (Some(path), None) => FileReference::ReflectionFile(path),
            (None, Some(dir)) => FileReference::Directory(dir),
            (Some(_), Some(_)) => {
                return Err("record sets both `xds_ascii` and `directory`".to_string())
            }
            (None, None) => return Err("record needs `xds_ascii` or `directory`".to_string()),
        };
        Ok(Self::new(doc.unit_cell, doc.space_group, file_reference))
    }
}

/// Records in collection order. The order decides the order of the
/// INPUT_FILE blocks in the control file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl Extend<Record> for RecordSet {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Record>> for RecordSet {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl IntoIterator for RecordSet {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
