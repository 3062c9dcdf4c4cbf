//! Move = collision-safe copy into the destination, then remove the source.
//!
//! Not atomic: if the removal fails after a successful copy, both copies
//! remain and the copied entry is still returned.

use tracing::{info, warn};

use crate::entry::Entry;
use crate::errors::{FsKitError, Result};
use crate::ops::copy::copy_as;
use crate::ops::remove::remove;

/// Move an entry into a destination directory.
///
/// The copied entry keeps the source's name unless that name is already
/// taken in the destination, in which case the disambiguation loop picks a
/// `" copy"`-suffixed one. Returns the new entry.
pub fn move_entry(source: &Entry, destination: &Entry) -> Result<Entry> {
    if !source.exists() {
        return Err(FsKitError::NotFound(source.path().to_path_buf()));
    }
    if !destination.exists() {
        return Err(FsKitError::DestinationNotFound(
            destination.path().to_path_buf(),
        ));
    }
    if !destination.is_dir() {
        return Err(FsKitError::NotADirectory(destination.path().to_path_buf()));
    }

    let moved = copy_as(source, Some(destination), None)?;

    if !remove(source)? {
        warn!(src = %source.path().display(), "copy succeeded but source removal was refused; both copies remain");
    }

    info!(src = %source.path().display(), dest = %moved.path().display(), "moved");
    Ok(moved)
}
