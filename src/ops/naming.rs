//! Duplicate-name resolution for copies.
//!
//! Candidate order for a source named `stem+ext`:
//! - attempt 0: `stem+ext` unchanged
//! - attempt 1: `"<stem> copy<ext>"`
//! - attempt n (n >= 2): `"<stem> copy (n)<ext>"`
//!
//! The destination's existing names are listed once; the first candidate
//! absent from that snapshot wins. Concurrent external writers can still
//! race the snapshot; callers accept that.

use std::collections::HashSet;
use std::path::Path;

use tracing::trace;

use crate::entry::split_name;
use crate::errors::{FsKitError, Result};

/// Separator between a name's stem and its extension.
pub(crate) const EXTENSION_SEPARATOR: char = '.';

/// Marker appended to the stem of a disambiguated copy.
pub(crate) const COPY_MARKER: &str = " copy";

/// Upper bound on the candidate search. Exhausting it indicates a
/// pathological directory and is treated as an environment failure.
pub(crate) const MAX_NAME_ATTEMPTS: u64 = 1_000_000;

/// Pick a name for `full_name` that does not collide with anything
/// currently listed in `dest_dir`.
pub(crate) fn free_name(dest_dir: &Path, full_name: &str) -> Result<String> {
    let taken = existing_names(dest_dir)?;
    let (stem, ext) = split_name(full_name);

    let mut collisions = 0u32;
    for attempt in 0..MAX_NAME_ATTEMPTS {
        let candidate = candidate_name(stem, ext, attempt);
        if !taken.contains(&candidate) {
            return Ok(candidate);
        }
        collisions += 1;
        if collisions == 3 {
            trace!(name = full_name, dir = %dest_dir.display(), "multiple collisions, continuing candidate search");
        }
    }

    Err(FsKitError::NameSearchExhausted {
        name: full_name.to_string(),
        dir: dest_dir.to_path_buf(),
        attempts: MAX_NAME_ATTEMPTS,
    })
}

/// The n-th candidate in the disambiguation sequence.
fn candidate_name(stem: &str, ext: &str, attempt: u64) -> String {
    match attempt {
        0 => format!("{stem}{ext}"),
        1 => format!("{stem}{COPY_MARKER}{ext}"),
        n => format!("{stem}{COPY_MARKER} ({n}){ext}"),
    }
}

/// One-shot snapshot of the names currently present in a directory.
fn existing_names(dir: &Path) -> Result<HashSet<String>> {
    let mut names = HashSet::new();
    let listing = std::fs::read_dir(dir).map_err(|e| FsKitError::io("list directory", dir, e))?;
    for item in listing {
        let item = item.map_err(|e| FsKitError::io("list directory", dir, e))?;
        names.insert(item.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn candidate_sequence_for_file_with_extension() {
        assert_eq!(candidate_name("FILE", ".txt", 0), "FILE.txt");
        assert_eq!(candidate_name("FILE", ".txt", 1), "FILE copy.txt");
        assert_eq!(candidate_name("FILE", ".txt", 2), "FILE copy (2).txt");
        assert_eq!(candidate_name("FILE", ".txt", 17), "FILE copy (17).txt");
    }

    #[test]
    fn candidate_sequence_for_directory_has_no_extension() {
        assert_eq!(candidate_name("DIRECTORY", "", 1), "DIRECTORY copy");
        assert_eq!(candidate_name("DIRECTORY", "", 3), "DIRECTORY copy (3)");
    }

    #[test]
    fn hidden_file_keeps_leading_dot_in_stem() {
        let (stem, ext) = split_name(".env");
        assert_eq!(candidate_name(stem, ext, 1), ".env copy");
    }

    #[test]
    fn free_name_returns_own_name_when_absent() {
        let td = tempdir().unwrap();
        assert_eq!(free_name(td.path(), "FILE.txt").unwrap(), "FILE.txt");
    }

    #[test]
    fn free_name_skips_taken_candidates() {
        let td = tempdir().unwrap();
        std::fs::write(td.path().join("FILE.txt"), b"x").unwrap();
        assert_eq!(free_name(td.path(), "FILE.txt").unwrap(), "FILE copy.txt");

        std::fs::write(td.path().join("FILE copy.txt"), b"x").unwrap();
        assert_eq!(
            free_name(td.path(), "FILE.txt").unwrap(),
            "FILE copy (2).txt"
        );
    }
}
