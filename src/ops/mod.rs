//! Filesystem operations: modularized by family.

mod copy;
mod hash;
mod helpers;
mod read;
mod transfer;
mod tree;

pub use copy::{copy_recursive_pattern, copy_recursive_sync, copy_sync, touch};
pub use hash::{checksum, file_hash, HashOutcome, CHECKSUM_ERROR};
pub use read::{browse, cat, cat_sync, BrowseResult};
pub use transfer::{copy, move_file};
pub use tree::{mkdir, rm, rm_pattern, rmdir};
