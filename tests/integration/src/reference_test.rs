//! End-to-end test against the reference shelf
//!
//! Exercises the complete flow: search-path discovery -> explicit
//! registration -> merge -> render -> write, and compares the written file
//! byte for byte with `test-fixtures/reference/reference.shelf`.

use pretty_assertions::assert_eq;
use shelf_content::{DiagnosticKind, Severity, parse_file};
use shelf_core::{ShelfConfig, ShelfManager};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("test-fixtures")
}

fn item_dir(index: usize) -> PathBuf {
    fixtures().join("shelves").join(format!("item{index:02}"))
}

fn item(index: usize) -> PathBuf {
    item_dir(index).join(format!("item_{index:02}.shelf"))
}

/// Items 2 and 3 come from the search path, items 1 and 4 are registered
/// explicitly afterwards.
fn reference_manager() -> ShelfManager {
    let search = env::join_paths([item_dir(2), item_dir(3)]).unwrap();
    let mut manager =
        ShelfManager::with_search_path(ShelfConfig::default(), Some(search.as_os_str())).unwrap();
    assert!(manager.register_source(item(1)));
    assert!(manager.register_source(item(4)));
    manager
}

#[test]
fn test_sources_fold_in_registration_order() {
    let manager = reference_manager();
    assert_eq!(manager.sources(), &[item(2), item(3), item(1), item(4)]);
}

#[test]
fn test_written_shelf_matches_reference() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("merged.shelf");
    let mut manager = reference_manager();

    let written = manager.write_shelf(Some(target.as_path())).unwrap();

    let reference = fs::read_to_string(fixtures().join("reference").join("reference.shelf")).unwrap();
    let actual = fs::read_to_string(&written).unwrap();
    assert_eq!(actual, reference);
}

#[test]
fn test_merged_state() {
    let mut manager = reference_manager();
    manager.build();

    let shelf_names: Vec<_> = manager.shelves().keys().map(String::as_str).collect();
    assert_eq!(shelf_names, vec!["modeling", "camera_tools", "lighting", "favorites"]);

    // item_01 replaces the older cleanup tool from item_02 in place
    let modeling: Vec<_> = manager.shelves()["modeling"].keys().map(String::as_str).collect();
    assert_eq!(modeling, vec!["geo_cleanup", "geo_export"]);
    assert_eq!(manager.shelves()["modeling"]["geo_cleanup"].label, "Cleanup");

    // The whole record is replaced, so the help URL from item_02 is gone
    let cam_rig = &manager.shelves()["camera_tools"]["cam_rig"];
    assert_eq!(cam_rig.script.as_ref().unwrap().script_type, "python");
    assert!(cam_rig.help_url.is_none());

    assert_eq!(manager.labels()["camera_tools"], "Camera");
    assert_eq!(manager.labels()["favorites"], "Favorites");
    assert!(!manager.shelves().contains_key("empty_shelf"));
}

#[test]
fn test_reference_diagnostics() {
    let mut manager = reference_manager();
    manager.build();

    let warnings: Vec<_> = manager
        .diagnostics()
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].kind, DiagnosticKind::MalformedTool);
    assert_eq!(warnings[0].origin.as_deref(), Some(item(3).as_path()));

    let kinds: Vec<_> = manager.diagnostics().iter().map(|d| d.kind).collect();
    assert!(kinds.contains(&DiagnosticKind::UnreferencedTool));
    assert!(kinds.contains(&DiagnosticKind::EmptyGroup));
}

#[test]
fn test_reference_round_trips_through_parser() {
    let reference = fixtures().join("reference").join("reference.shelf");
    let parsed = parse_file(&reference, "shelf");
    assert!(!parsed.has_warnings());

    let mut manager = reference_manager();
    manager.build();
    assert_eq!(&parsed.value.shelves, manager.shelves());

    // CDATA split around the terminator reads back as one body
    let lgt_key = parsed.value.tool("lighting", "lgt_key").unwrap();
    assert_eq!(
        lgt_key.help_text.as_ref().map(|h| h.body.as_str()),
        Some("Use ]]> carefully")
    );
}

#[test]
fn test_rebuild_is_idempotent() {
    let mut manager = reference_manager();
    manager.build();
    let first = manager.render().unwrap();
    manager.build();
    assert_eq!(manager.render().unwrap(), first);
}
