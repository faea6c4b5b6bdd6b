//! Tests for leaderboard persistence.

use noughts::{LeaderboardError, LeaderboardStore};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_save_overwrites_previous_score() {
    let dir = tempdir().expect("tempdir");
    let store = LeaderboardStore::new(dir.path().join("leaderboard.txt"));

    store.save("Ann", 3).expect("first save");
    store.save("Ann", 5).expect("second save");

    let leaders = store.load().expect("load");
    assert_eq!(leaders.get("Ann"), Some(5));
    assert_eq!(leaders.len(), 1);
    assert_eq!(leaders.to_string(), "Leaderboard\n Ann: 5");
}

#[test]
fn test_file_is_plain_json_object() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("leaderboard.txt");
    let store = LeaderboardStore::new(&path);

    store.save("Ann", 2).expect("save");
    store.save("Zoë", -1).expect("save");

    let raw = fs::read_to_string(&path).expect("read");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(value, serde_json::json!({"Ann": 2, "Zoë": -1}));
}

#[test]
fn test_missing_file_is_storage_unavailable() {
    let dir = tempdir().expect("tempdir");
    let store = LeaderboardStore::new(dir.path().join("absent.txt"));
    match store.load() {
        Err(LeaderboardError::StorageUnavailable { .. }) => {}
        other => panic!("expected StorageUnavailable, got {other:?}"),
    }
}

#[test]
fn test_wrong_shape_is_parse_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("leaderboard.txt");
    fs::write(&path, r#"{"Ann": [1]}"#).expect("write");
    let store = LeaderboardStore::new(&path);
    assert!(matches!(store.load(), Err(LeaderboardError::Parse { .. })));
}

#[test]
fn test_no_temp_files_left_behind() {
    let dir = tempdir().expect("tempdir");
    let store = LeaderboardStore::new(dir.path().join("leaderboard.txt"));
    for score in 0..5 {
        store.save("Ann", score).expect("save");
    }
    let names: Vec<_> = fs::read_dir(dir.path())
        .expect("read_dir")
        .map(|entry| entry.expect("entry").file_name())
        .collect();
    assert_eq!(names, ["leaderboard.txt"]);
}

#[cfg(unix)]
#[test]
fn test_save_keeps_existing_file_mode() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("leaderboard.txt");
    let store = LeaderboardStore::new(&path);
    for mode in [0o644, 0o640, 0o664] {
        fs::write(&path, r#"{"Ann": 1}"#).expect("write");
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).expect("chmod");

        store.save("Bob", 2).expect("save");

        let after = fs::metadata(&path).expect("metadata").permissions().mode() & 0o777;
        assert_eq!(after, mode, "mode {mode:o} changed to {after:o}");
    }
}

#[cfg(unix)]
#[test]
fn test_new_file_gets_default_mode() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().expect("tempdir");
    let reference = dir.path().join("plain.txt");
    fs::write(&reference, "").expect("write");
    let expected = fs::metadata(&reference).expect("metadata").permissions().mode() & 0o777;

    let path = dir.path().join("leaderboard.txt");
    LeaderboardStore::new(&path).save("Ann", 1).expect("save");

    let mode = fs::metadata(&path).expect("metadata").permissions().mode() & 0o777;
    assert_eq!(mode, expected);
}
