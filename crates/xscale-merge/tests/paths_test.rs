//! Tests for reflection path resolution.

use std::path::{Path, PathBuf};

use xscale_core::types::{FileReference, Record, RecordSet, SpaceGroup, UnitCell};
use xscale_merge::paths::normalize;
use xscale_merge::PathResolver;

fn cell() -> UnitCell {
    UnitCell::new([10.0, 20.0, 30.0, 90.0, 90.0, 90.0])
}

fn group() -> SpaceGroup {
    SpaceGroup::new(5).unwrap()
}

#[cfg(unix)]
#[test]
fn test_directory_reference_round_trip() {
    let resolver = PathResolver::new("/data/merge").unwrap();
    let record = Record::in_directory(cell(), group(), "/data/run1");

    let resolved = resolver.resolve(&record).unwrap();
    assert_eq!(resolved.as_str(), "../run1/XDS_ASCII.HKL");

    let rejoined = normalize(&resolver.working_dir().join(resolved.as_str()));
    assert_eq!(rejoined, PathBuf::from("/data/run1").join("XDS_ASCII.HKL"));
}

#[cfg(unix)]
#[test]
fn test_explicit_file_under_working_dir() {
    let resolver = PathResolver::new("/data").unwrap();
    let record = Record::with_reflection_file(cell(), group(), "/data/run2/XDS_ASCII.HKL");
    assert_eq!(resolver.resolve(&record).unwrap().as_str(), "run2/XDS_ASCII.HKL");
}

#[cfg(unix)]
#[test]
fn test_relative_reference_anchored_at_working_dir() {
    let resolver = PathResolver::new("/data").unwrap();
    let record = Record::in_directory(cell(), group(), "./runs/../run3");
    assert_eq!(
        resolver.absolute(record.file_reference()),
        PathBuf::from("/data/run3/XDS_ASCII.HKL")
    );
    assert_eq!(resolver.resolve(&record).unwrap().as_str(), "run3/XDS_ASCII.HKL");
}

#[test]
fn test_resolution_does_not_touch_filesystem() {
    let scratch = tempfile::tempdir().unwrap();
    let resolver = PathResolver::new(scratch.path()).unwrap();
    let record = Record::in_directory(cell(), group(), scratch.path().join("never_created"));
    assert_eq!(
        resolver.resolve(&record).unwrap().as_str(),
        "never_created/XDS_ASCII.HKL"
    );
}

#[cfg(unix)]
#[test]
fn test_resolve_all_keeps_order() {
    let resolver = PathResolver::new("/data").unwrap();
    let set: RecordSet = ["c", "a", "b"]
        .into_iter()
        .map(|d| Record::in_directory(cell(), group(), Path::new("/data").join(d)))
        .collect();
    let resolved: Vec<String> = resolver
        .resolve_all(&set)
        .unwrap()
        .into_iter()
        .map(|p| p.as_str().to_string())
        .collect();
    assert_eq!(
        resolved,
        vec!["c/XDS_ASCII.HKL", "a/XDS_ASCII.HKL", "b/XDS_ASCII.HKL"]
    );
}

#[test]
fn test_absolute_of_explicit_reference() {
    let scratch = tempfile::tempdir().unwrap();
    let resolver = PathResolver::new(scratch.path()).unwrap();
    let explicit = scratch.path().join("x").join("scaled.hkl");
    assert_eq!(
        resolver.absolute(&FileReference::ReflectionFile(explicit.clone())),
        normalize(&explicit)
    );
}

#[cfg(unix)]
#[test]
fn test_anchor_differs_from_working_dir() {
    let resolver = PathResolver::new("/data/merge")
        .unwrap()
        .anchored_at("/data")
        .unwrap();
    let record = Record::in_directory(cell(), group(), "run1");

    assert_eq!(
        resolver.absolute(record.file_reference()),
        PathBuf::from("/data/run1/XDS_ASCII.HKL")
    );
    assert_eq!(resolver.resolve(&record).unwrap().as_str(), "../run1/XDS_ASCII.HKL");
}
