//! Filesystem operations: modularized.

mod contents;
mod copy;
mod create;
mod move_entry;
pub(crate) mod naming;
mod remove;
mod rename;
mod size;

pub use contents::{contents, UNBOUNDED_DEPTH};
pub use copy::copy_as;
pub use create::create;
pub use move_entry::move_entry;
pub use remove::{clear, remove};
pub use rename::rename;
pub use size::size;
