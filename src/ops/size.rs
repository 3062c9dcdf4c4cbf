//! Aggregate size computation.

use std::fs;

use bigdecimal::BigDecimal;
use tracing::debug;

use crate::capacity::CapacityUnit;
use crate::entry::Entry;
use crate::errors::{FsKitError, Result};
use crate::ops::contents::{contents, UNBOUNDED_DEPTH};

/// Size of an entry in the given unit.
///
/// A file contributes its own byte length. A directory is the sum of the
/// byte lengths of every file in its full subtree; directories themselves
/// contribute zero. The quotient is exact decimal arithmetic, not binary
/// floating point.
pub fn size(entry: &Entry, unit: CapacityUnit) -> Result<BigDecimal> {
    if !entry.exists() {
        return Err(FsKitError::NotFound(entry.path().to_path_buf()));
    }

    let bytes: u64 = if entry.is_dir() {
        let mut total = 0u64;
        for item in contents(entry, UNBOUNDED_DEPTH)? {
            if item.is_file() {
                total += file_len(&item)?;
            }
        }
        total
    } else {
        file_len(entry)?
    };

    debug!(path = %entry.path().display(), bytes, unit = ?unit, "aggregated size");
    Ok(BigDecimal::from(bytes) / BigDecimal::from(unit.bytes()))
}

fn file_len(entry: &Entry) -> Result<u64> {
    fs::metadata(entry.path())
        .map(|m| m.len())
        .map_err(|e| FsKitError::io("stat", entry.path(), e))
}
