//! Bounded-depth directory traversal.
//!
//! Listing order is the host's directory order per level, with a subtree's
//! contents yielded before the subtree's own directory once it is expanded
//! (contents-first). Deep entries therefore precede shallower siblings that
//! come after them in the parent listing.

use tracing::debug;
use walkdir::WalkDir;

use crate::entry::Entry;
use crate::errors::{FsKitError, Result};

/// Depth value meaning "recurse fully"; used internally by [`crate::size`].
pub const UNBOUNDED_DEPTH: usize = usize::MAX;

/// List the contents of a directory down to `depth` levels.
///
/// `depth = 1` lists immediate children only. Files and directories are
/// intermixed in a single flat sequence. An empty directory yields an
/// empty vec.
pub fn contents(entry: &Entry, depth: usize) -> Result<Vec<Entry>> {
    if depth < 1 {
        return Err(FsKitError::DepthOutOfRange(depth));
    }
    if !entry.exists() {
        return Err(FsKitError::NotFound(entry.path().to_path_buf()));
    }
    if !entry.is_dir() {
        return Err(FsKitError::NotADirectory(entry.path().to_path_buf()));
    }

    let mut listed = Vec::new();
    for item in WalkDir::new(entry.path())
        .min_depth(1)
        .max_depth(depth)
        .contents_first(true)
    {
        let item = item.map_err(|e| {
            let path = e
                .path()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| entry.path().to_path_buf());
            let source = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("walk interrupted"));
            FsKitError::io("list directory", path, source)
        })?;
        listed.push(Entry::new(item.into_path()));
    }

    debug!(dir = %entry.path().display(), depth, count = listed.len(), "listed contents");
    Ok(listed)
}
