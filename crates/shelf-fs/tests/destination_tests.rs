//! Tests for output destination resolution

use rstest::rstest;
use shelf_fs::{Error, resolve_destination, temp_shelf_dir, write_to_destination};
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_explicit_destination_is_returned_as_is() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("merged.shelf");

    let resolved = resolve_destination(Some(target.as_path()), "dynamic_shelf", "shelf").unwrap();

    assert_eq!(resolved, target);
    assert!(!target.exists());
}

#[rstest]
#[case("missing/merged.shelf")]
#[case("missing/deeper/merged.shelf")]
fn test_explicit_destination_requires_existing_parent(#[case] relative: &str) {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join(relative);

    let result = resolve_destination(Some(target.as_path()), "dynamic_shelf", "shelf");

    assert!(matches!(result, Err(Error::DestinationDirMissing { .. })));
}

#[test]
fn test_bare_file_name_resolves_against_current_dir() {
    let resolved = resolve_destination(Some(Path::new("merged.shelf")), "dynamic_shelf", "shelf")
        .unwrap();
    assert_eq!(resolved, Path::new("merged.shelf"));
}

#[test]
fn test_temp_destination_is_unique_and_persistent() {
    let name = "dynamic_shelf_destination_tests";

    let first = resolve_destination(None, name, "shelf").unwrap();
    let second = resolve_destination(None, name, "shelf").unwrap();

    assert_ne!(first, second);
    assert!(first.is_file());
    assert!(second.is_file());
    assert!(first.starts_with(temp_shelf_dir(name)));
    assert_eq!(first.extension().unwrap(), "shelf");

    std::fs::remove_file(first).unwrap();
    std::fs::remove_file(second).unwrap();
}

#[test]
fn test_temp_destination_tolerates_existing_dir() {
    let name = "dynamic_shelf_existing_dir_tests";
    std::fs::create_dir_all(temp_shelf_dir(name)).unwrap();

    let path = resolve_destination(None, name, "shelf").unwrap();
    assert!(path.is_file());

    std::fs::remove_file(path).unwrap();
}

#[test]
fn test_write_to_explicit_destination() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("merged.shelf");

    let written =
        write_to_destination(Some(target.as_path()), "dynamic_shelf", "shelf", b"<shelfDocument/>")
            .unwrap();

    assert_eq!(written, target);
    assert_eq!(std::fs::read_to_string(&target).unwrap(), "<shelfDocument/>");
}

#[test]
fn test_write_to_temp_destination() {
    let written =
        write_to_destination(None, "dynamic_shelf_write_tests", "shelf", b"<shelfDocument/>")
            .unwrap();

    assert!(written.starts_with(temp_shelf_dir("dynamic_shelf_write_tests")));
    assert_eq!(std::fs::read_to_string(&written).unwrap(), "<shelfDocument/>");
    std::fs::remove_file(written).unwrap();
}
