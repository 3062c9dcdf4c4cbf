//! Removal and directory clearing.

use std::fs;

use tracing::{info, warn};

use crate::entry::Entry;
use crate::errors::{FsKitError, Result};
use crate::ops::contents::contents;

/// Delete an entry; directories are deleted with their whole subtree.
///
/// Returns `Ok(false)` when the host refuses the deletion (including a
/// refusal on any nested path). Precondition violations error instead.
pub fn remove(entry: &Entry) -> Result<bool> {
    if !entry.exists() {
        return Err(FsKitError::NotFound(entry.path().to_path_buf()));
    }

    let outcome = if entry.is_dir() {
        fs::remove_dir_all(entry.path())
    } else {
        fs::remove_file(entry.path())
    };

    match outcome {
        Ok(()) => {
            info!(path = %entry.path().display(), "removed");
            Ok(true)
        }
        Err(e) => {
            warn!(path = %entry.path().display(), error = %e, "host refused removal");
            Ok(false)
        }
    }
}

/// Remove every immediate child of a directory, preserving the directory.
///
/// Returns true only if all children were removed successfully.
pub fn clear(entry: &Entry) -> Result<bool> {
    if !entry.exists() {
        return Err(FsKitError::NotFound(entry.path().to_path_buf()));
    }
    if !entry.is_dir() {
        return Err(FsKitError::NotADirectory(entry.path().to_path_buf()));
    }

    let mut all_removed = true;
    for child in contents(entry, 1)? {
        all_removed &= remove(&child)?;
    }
    Ok(all_removed)
}
