//! The `Entry` value type: a thin wrapper around a path string.
//!
//! Entries carry no cached filesystem state. Every predicate re-queries the
//! host, so an `Entry` is just a name for a location; whether anything is
//! actually there is decided fresh at each call.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// What kind of thing an existing entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    File,
    Directory,
}

/// A named location on the host filesystem (file or directory).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    path: PathBuf,
}

impl Entry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Live existence check against the host; never cached.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn is_dir(&self) -> bool {
        self.path.is_dir()
    }

    pub fn is_file(&self) -> bool {
        self.path.is_file()
    }

    /// Kind of the entry, or `None` if it does not currently exist.
    pub fn kind(&self) -> Option<EntryKind> {
        let meta = fs::metadata(&self.path).ok()?;
        if meta.is_dir() {
            Some(EntryKind::Directory)
        } else {
            Some(EntryKind::File)
        }
    }

    /// Parent directory as an `Entry`. Root-ish paths fall back to `.` so
    /// sibling lookups still have a directory to work with.
    pub fn parent(&self) -> Entry {
        match self.path.parent() {
            // A bare file name has the empty path as parent; map both that
            // and a missing parent to the current directory.
            Some(p) if !p.as_os_str().is_empty() => Entry::new(p),
            _ => Entry::new("."),
        }
    }

    /// Final path segment, optionally stripped of its extension.
    ///
    /// With `include_extension` the segment is returned unchanged. Without
    /// it, everything from the last `.` onward is dropped, unless that `.`
    /// is the first character (hidden-file convention: `.FILE` stays
    /// `.FILE`) or there is no `.` at all.
    ///
    /// Operates on the path string only; the entry need not exist.
    pub fn name(&self, include_extension: bool) -> String {
        let segment = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if include_extension {
            return segment;
        }
        let (stem, _ext) = split_name(&segment);
        stem.to_string()
    }
}

impl From<PathBuf> for Entry {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for Entry {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}

/// Split a name into (stem, extension-with-dot) under the hidden-file rule:
/// a `.` at index 0 is part of the stem, not an extension separator.
///
/// `"FILE.txt"` -> `("FILE", ".txt")`, `".FILE"` -> `(".FILE", "")`,
/// `".FILE.txt"` -> `(".FILE", ".txt")`, `"FILE"` -> `("FILE", "")`.
pub(crate) fn split_name(name: &str) -> (&str, &str) {
    match name.rfind(crate::ops::naming::EXTENSION_SEPARATOR) {
        Some(i) if i > 0 => (&name[..i], &name[i..]),
        _ => (name, ""),
    }
}
