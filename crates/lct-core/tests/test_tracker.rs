//! Syllabus Tracker Tests
//!
//! File-backed persistence and the fallback to an unchecked checklist.

use lct_core::tracker::{
    default_state, CompletionStore, JsonFileStore, SyllabusTracker, ITEMS, STORAGE_KEY,
};
use tempfile::tempdir;

#[test]
fn test_file_store_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(format!("{STORAGE_KEY}.json"));

    let mut tracker = SyllabusTracker::load(JsonFileStore::new(&path));
    assert_eq!(tracker.toggle("3-3"), Ok(true));
    assert_eq!(tracker.toggle("3-5"), Ok(true));
    assert_eq!(tracker.toggle("3-5"), Ok(false));

    let reloaded = SyllabusTracker::load(JsonFileStore::new(&path));
    assert_eq!(reloaded.is_done("3-3"), Some(true));
    assert_eq!(reloaded.is_done("3-5"), Some(false));
    assert_eq!(reloaded.progress().completed_hours, 3);
}

#[test]
fn test_missing_file_reads_as_empty() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("absent.json"));
    assert!(store.read().unwrap().is_empty());
    assert_eq!(SyllabusTracker::load(store).state(), &default_state());
}

#[test]
fn test_corrupt_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("progress.json");
    std::fs::write(&path, "not json at all").unwrap();

    let store = JsonFileStore::new(&path);
    assert!(store.read().is_err());

    let mut tracker = SyllabusTracker::load(store);
    assert_eq!(tracker.state(), &default_state());

    // The next change overwrites the corrupt record
    tracker.set("3-1", true).unwrap();
    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains(r#""3-1":true"#));
}

#[test]
fn test_write_creates_parent_directories() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("state.json");
    let mut tracker = SyllabusTracker::load(JsonFileStore::new(&path));
    tracker.reset();
    assert!(path.exists());
}

#[test]
fn test_full_completion() {
    let dir = tempdir().unwrap();
    let mut tracker = SyllabusTracker::load(JsonFileStore::new(dir.path().join("all.json")));
    for item in ITEMS {
        tracker.set(item.id, true).unwrap();
    }
    let p = tracker.progress();
    assert_eq!(p.module_percent, 100);
    assert_eq!(p.hour_percent, 100);
    assert_eq!(p.completed_hours, p.total_hours);
}
