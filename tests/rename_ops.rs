use std::fs;
use tempfile::tempdir;

use fskit::{rename, Entry, ErrorKind, FsKitError};

#[test]
fn empty_or_whitespace_name_fails() {
    let td = tempdir().unwrap();
    let file = Entry::new(td.path().join("FILE.txt"));
    fs::write(file.path(), b"x").unwrap();

    for bad in ["", "   "] {
        let err = rename(&file, bad).unwrap_err();
        assert!(matches!(err, FsKitError::EmptyName));
        assert_eq!(err.kind(), ErrorKind::InvalidUsage);
    }
}

#[test]
fn missing_entry_fails() {
    let td = tempdir().unwrap();
    let missing = Entry::new(td.path().join("FILE.txt"));
    assert!(matches!(
        rename(&missing, "renamed.txt").unwrap_err(),
        FsKitError::NotFound(_)
    ));
}

#[test]
fn sibling_collision_fails() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("renamed.txt"), b"taken").unwrap();
    let file = Entry::new(td.path().join("FILE.txt"));
    fs::write(file.path(), b"x").unwrap();

    assert!(matches!(
        rename(&file, "renamed.txt").unwrap_err(),
        FsKitError::TargetExists(_)
    ));
    // The collision check fires before any mutation.
    assert!(file.exists());
}

#[test]
fn rename_returns_new_entry_in_same_parent() {
    let td = tempdir().unwrap();
    let file = Entry::new(td.path().join("FILE.txt"));
    fs::write(file.path(), b"payload").unwrap();

    let renamed = rename(&file, "renamed.txt").unwrap();
    assert!(renamed.exists());
    assert!(!file.exists());
    assert_eq!(renamed.name(true), "renamed.txt");
    assert_eq!(renamed.parent(), file.parent());
    assert_eq!(fs::read(renamed.path()).unwrap(), b"payload");
}
