//! Collision-safe copy.
//!
//! With an explicit target name a pre-existing collision is a usage error.
//! Without one, the disambiguation loop in [`super::naming`] picks the
//! first free candidate (`"<name>"`, `"<stem> copy<ext>"`,
//! `"<stem> copy (n)<ext>"`). Copying a source into its own parent always
//! lands on the `" copy"` suffix: attempt 0 is the source's own name,
//! which is present in the listing because the source itself is.

use std::fs;
use std::path::Path;

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::entry::Entry;
use crate::errors::{FsKitError, Result};
use crate::ops::naming::free_name;

/// Copy an entry, resolving the target name against the destination.
///
/// `destination` defaults to the source's own parent directory. Directory
/// sources are copied as whole trees; file sources byte-for-byte via the
/// host copy primitive. Returns the resulting entry.
pub fn copy_as(source: &Entry, destination: Option<&Entry>, name: Option<&str>) -> Result<Entry> {
    if !source.exists() {
        return Err(FsKitError::NotFound(source.path().to_path_buf()));
    }

    let dest_dir = match destination {
        Some(d) => d.clone(),
        None => source.parent(),
    };
    if !dest_dir.exists() {
        return Err(FsKitError::DestinationNotFound(dest_dir.path().to_path_buf()));
    }
    if !dest_dir.is_dir() {
        return Err(FsKitError::NotADirectory(dest_dir.path().to_path_buf()));
    }

    let target_name = match name {
        Some(n) => {
            if dest_dir.path().join(n).exists() {
                return Err(FsKitError::TargetExists(dest_dir.path().join(n)));
            }
            n.to_string()
        }
        None => free_name(dest_dir.path(), &source.name(true))?,
    };

    let target = Entry::new(dest_dir.path().join(&target_name));
    debug!(src = %source.path().display(), dest = %target.path().display(), "resolved copy target");

    if source.is_dir() {
        copy_tree(source.path(), target.path())?;
    } else {
        fs::copy(source.path(), target.path())
            .map_err(|e| FsKitError::io("copy file", source.path(), e))?;
    }

    info!(src = %source.path().display(), dest = %target.path().display(), "copied");
    Ok(target)
}

/// Recursively copy a directory tree. Directories are created as they are
/// encountered (pre-order, so parents exist before their files).
fn copy_tree(src: &Path, target: &Path) -> Result<()> {
    fs::create_dir_all(target).map_err(|e| FsKitError::io("create directory", target, e))?;

    for item in WalkDir::new(src).min_depth(1) {
        let item = item.map_err(|e| {
            let path = e
                .path()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| src.to_path_buf());
            let source = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("walk interrupted"));
            FsKitError::io("walk source tree", path, source)
        })?;

        // Walk roots at src, so every entry strips to a relative path.
        let rel = item.path().strip_prefix(src).map_err(|_| {
            FsKitError::io(
                "walk source tree",
                item.path(),
                std::io::Error::other("entry outside walk root"),
            )
        })?;
        let dst = target.join(rel);

        if item.file_type().is_dir() {
            fs::create_dir_all(&dst).map_err(|e| FsKitError::io("create directory", dst.clone(), e))?;
        } else {
            fs::copy(item.path(), &dst)
                .map_err(|e| FsKitError::io("copy file", item.path(), e))?;
        }
    }
    Ok(())
}
