//! Core library for `fskit`.
//!
//! A convenience layer over the host filesystem: name extraction,
//! bounded-depth listing, aggregate size with unit conversion, recursive
//! removal and directory clearing, collision-checked rename, collision-safe
//! copy with automatic name generation, and move (copy + remove).
//!
//! Every operation re-reads filesystem state fresh and is synchronous;
//! there is no caching, locking, or retry logic. Failures split into two
//! kinds callers can match on (see [`ErrorKind`]): invalid usage, raised
//! before anything is mutated, and environment failures, where a host
//! primitive refused despite satisfied preconditions.
//!
//! ```no_run
//! use fskit::{copy_as, Entry};
//!
//! let report = Entry::new("/data/report.txt");
//! // Second copy in the same directory lands on "report copy.txt".
//! let copy = copy_as(&report, None, None)?;
//! assert_eq!(copy.name(true), "report copy.txt");
//! # Ok::<(), fskit::FsKitError>(())
//! ```

pub mod capacity;
pub mod entry;
pub mod errors;
pub mod ops;

pub use capacity::CapacityUnit;
pub use entry::{Entry, EntryKind};
pub use errors::{ErrorKind, FsKitError, Result};
pub use ops::{clear, contents, copy_as, create, move_entry, remove, rename, size, UNBOUNDED_DEPTH};
