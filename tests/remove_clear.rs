use std::fs;
use tempfile::tempdir;

use fskit::{clear, contents, remove, Entry, FsKitError};

#[test]
fn remove_missing_entry_fails() {
    let td = tempdir().unwrap();
    let missing = Entry::new(td.path().join("FILE.txt"));
    assert!(matches!(
        remove(&missing).unwrap_err(),
        FsKitError::NotFound(_)
    ));
}

#[test]
fn remove_deletes_file() {
    let td = tempdir().unwrap();
    let file = Entry::new(td.path().join("FILE.txt"));
    fs::write(file.path(), b"x").unwrap();

    assert!(remove(&file).unwrap());
    assert!(!file.exists());
}

#[test]
fn remove_deletes_directory_subtree() {
    let td = tempdir().unwrap();
    let dir = Entry::new(td.path().join("DIRECTORY"));
    fs::create_dir_all(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested").join("FILE.txt"), b"x").unwrap();

    assert!(remove(&dir).unwrap());
    assert!(!dir.exists());
}

#[test]
fn clear_missing_or_file_entry_fails() {
    let td = tempdir().unwrap();
    let missing = Entry::new(td.path().join("DIRECTORY"));
    assert!(matches!(
        clear(&missing).unwrap_err(),
        FsKitError::NotFound(_)
    ));

    let file = Entry::new(td.path().join("FILE.txt"));
    fs::write(file.path(), b"x").unwrap();
    assert!(matches!(
        clear(&file).unwrap_err(),
        FsKitError::NotADirectory(_)
    ));
}

#[test]
fn clear_empties_directory_but_preserves_it() {
    let td = tempdir().unwrap();
    let dir = Entry::new(td.path().join("DIRECTORY"));
    let nested = dir.path().join("nested");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("deep.txt"), b"x").unwrap();
    fs::write(dir.path().join("top.txt"), b"y").unwrap();

    assert!(clear(&dir).unwrap());
    assert!(dir.exists());
    assert!(contents(&dir, 1).unwrap().is_empty());
}
