//! Typed error definitions for fskit.
//! Provides a small set of well-known failure modes callers can match on.

use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Broad classification of a failure: caller mistake vs. host trouble.
///
/// Invalid-usage failures are raised at the start of an operation, before
/// anything is mutated, and could have been avoided by the caller checking
/// first. Environment failures mean a host primitive refused despite
/// satisfied preconditions; the library does not retry them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// A precondition the caller could have verified was violated.
    InvalidUsage,
    /// The host filesystem refused an operation, or a search bound tripped.
    Environment,
}

#[derive(Debug, Error)]
pub enum FsKitError {
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("depth must be at least 1, got {0}")]
    DepthOutOfRange(usize),

    #[error("name cannot be empty or whitespace-only")]
    EmptyName,

    #[error("target already exists: {0}")]
    TargetExists(PathBuf),

    #[error("destination directory not found: {0}")]
    DestinationNotFound(PathBuf),

    #[error("entry already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("no free name for '{name}' in {dir} after {attempts} attempts")]
    NameSearchExhausted {
        name: String,
        dir: PathBuf,
        attempts: u64,
    },

    #[error("{op} '{path}': {source}")]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsKitError {
    /// Wrap a host I/O error with the operation and path it failed on.
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }

    /// Classify this error for callers that only care about the split
    /// between usage mistakes and host-level trouble.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_)
            | Self::NotADirectory(_)
            | Self::DepthOutOfRange(_)
            | Self::EmptyName
            | Self::TargetExists(_)
            | Self::DestinationNotFound(_)
            | Self::AlreadyExists(_) => ErrorKind::InvalidUsage,
            Self::NameSearchExhausted { .. } | Self::Io { .. } => ErrorKind::Environment,
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, FsKitError>;
