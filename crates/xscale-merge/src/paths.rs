//! Reflection file paths relative to the working directory.
//!
//! Resolution is purely lexical: no existence checks, no symlink
//! resolution. XSCALE is left to complain about files that are missing.

use std::path::{Component, Path, PathBuf};

use xscale_core::errors::PathError;
use xscale_core::types::{FileReference, Record, RecordSet, ResolvedPath};

#[derive(Debug, Clone)]
pub struct PathResolver {
    /// Directory the control file lives in; results are relative to it.
    working_dir: PathBuf,
    /// Relative references are joined onto this directory.
    anchor: PathBuf,
}

impl PathResolver {
    /// Resolve against `working_dir`, which also anchors relative
    /// references. A relative `working_dir` is anchored at the process
    /// working directory first.
    pub fn new(working_dir: impl AsRef<Path>) -> Result<Self, PathError> {
        let working_dir = absolute_dir(working_dir.as_ref())?;
        Ok(Self {
            anchor: working_dir.clone(),
            working_dir,
        })
    }

    /// Join relative references onto `anchor` instead of the working
    /// directory. Results stay relative to the working directory.
    pub fn anchored_at(self, anchor: impl AsRef<Path>) -> Result<Self, PathError> {
        Ok(Self {
            anchor: absolute_dir(anchor.as_ref())?,
            ..self
        })
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Absolute, normalized path of the reflection file a reference points to.
    pub fn absolute(&self, reference: &FileReference) -> PathBuf {
        normalize(&self.anchor.join(reference.reflection_path()))
    }

    /// The record's reflection file relative to the working directory, with
    /// `/` separators.
    pub fn resolve(&self, record: &Record) -> Result<ResolvedPath, PathError> {
        let absolute = self.absolute(record.file_reference());
        let relative = relative_posix(&absolute, &self.working_dir)?;
        tracing::debug!(
            reference = %record.file_reference().path().display(),
            relative = %relative,
            "resolved path"
        );
        Ok(relative)
    }

    /// Resolve every record in order, stopping at the first failure.
    pub fn resolve_all(&self, records: &RecordSet) -> Result<Vec<ResolvedPath>, PathError> {
        records.iter().map(|record| self.resolve(record)).collect()
    }
}

fn absolute_dir(dir: &Path) -> Result<PathBuf, PathError> {
    let absolute =
        std::path::absolute(dir).map_err(|source| PathError::WorkingDirUnavailable { source })?;
    Ok(normalize(&absolute))
}

/// Collapse `.` and `..` components without touching the filesystem.
/// `..` at the root stays at the root.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.last(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !matches!(out.last(), Some(Component::RootDir | Component::Prefix(_))) {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// Express absolute `path` relative to absolute `base`, joined with `/`.
///
/// Both must already be normalized. Fails when they do not share a root,
/// e.g. different drives on Windows.
pub fn relative_posix(path: &Path, base: &Path) -> Result<ResolvedPath, PathError> {
    let outside = || PathError::PathOutsideWorkingTree {
        path: path.to_path_buf(),
        working_dir: base.to_path_buf(),
    };

    let path_parts: Vec<Component<'_>> = path.components().collect();
    let base_parts: Vec<Component<'_>> = base.components().collect();

    let path_root = root_len(&path_parts);
    let base_root = root_len(&base_parts);
    if path_root == 0 || path_parts[..path_root] != base_parts[..base_root] {
        return Err(outside());
    }

    let common = path_parts
        .iter()
        .zip(base_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut segments: Vec<&str> = Vec::new();
    for _ in common..base_parts.len() {
        segments.push("..");
    }
    for component in &path_parts[common..] {
        let segment = component.as_os_str().to_str().ok_or_else(|| PathError::NotUnicode {
            path: path.to_path_buf(),
        })?;
        segments.push(segment);
    }

    if segments.is_empty() {
        return Ok(ResolvedPath::new("."));
    }
    Ok(ResolvedPath::new(segments.join("/")))
}

/// Number of leading prefix/root components.
fn root_len(parts: &[Component<'_>]) -> usize {
    parts
        .iter()
        .take_while(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
        .count()
}
