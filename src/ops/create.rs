//! Entry creation under an existing parent directory.

use std::fs;

use tracing::info;

use crate::entry::Entry;
use crate::errors::{FsKitError, Result};

/// Create an empty file or a directory at the entry's path.
///
/// The parent directory must already exist; the entry itself must not.
pub fn create(entry: &Entry, directory: bool) -> Result<bool> {
    let parent = entry.parent();
    if !parent.exists() {
        return Err(FsKitError::DestinationNotFound(
            parent.path().to_path_buf(),
        ));
    }
    if entry.exists() {
        return Err(FsKitError::AlreadyExists(entry.path().to_path_buf()));
    }

    if directory {
        fs::create_dir(entry.path())
            .map_err(|e| FsKitError::io("create directory", entry.path(), e))?;
    } else {
        fs::File::create(entry.path()).map_err(|e| FsKitError::io("create file", entry.path(), e))?;
    }

    info!(path = %entry.path().display(), directory, "created");
    Ok(true)
}
