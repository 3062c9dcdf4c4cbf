//! Collision-checked rename within the entry's own parent directory.

use std::fs;

use tracing::info;

use crate::entry::Entry;
use crate::errors::{FsKitError, Result};

/// Rename an entry in place.
///
/// The target keeps the same parent directory. A pre-existing sibling with
/// the requested name is a usage error; a host rename refusal after the
/// checks pass surfaces as an environment failure.
pub fn rename(entry: &Entry, new_name: &str) -> Result<Entry> {
    if new_name.trim().is_empty() {
        return Err(FsKitError::EmptyName);
    }
    if !entry.exists() {
        return Err(FsKitError::NotFound(entry.path().to_path_buf()));
    }

    let target = Entry::new(entry.parent().path().join(new_name));
    if target.exists() {
        return Err(FsKitError::TargetExists(target.path().to_path_buf()));
    }

    fs::rename(entry.path(), target.path())
        .map_err(|e| FsKitError::io("rename", entry.path(), e))?;

    info!(from = %entry.path().display(), to = %target.path().display(), "renamed");
    Ok(target)
}
