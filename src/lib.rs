//! Core library for `fs_extended`.
//!
//! A small filesystem utility facade in three families:
//!
//! - **Tree mutation** — [`mkdir`], [`rmdir`], [`rm`], [`rm_pattern`],
//!   [`copy_recursive_sync`], [`copy_recursive_pattern`]: synchronous,
//!   log-only operations. Expected conditions (missing target on delete,
//!   existing target on create) are warnings and count as success; unexpected
//!   I/O failures are logged at error level and the call returns. Nothing is
//!   raised to the caller.
//! - **File transfer** — [`touch`], [`copy_sync`] (whole-file in memory, a
//!   documented bound), and the async [`copy`] / [`move_file`] pair:
//!   streamed, bounded-memory, with rename-first move semantics and a
//!   copy+delete fallback only for cross-device renames.
//! - **Content access & hashing** — [`cat`] / [`cat_sync`] (missing file
//!   reads as empty string), [`browse`], [`is_directory`], and SHA-1 digests
//!   via [`checksum`] and the streaming [`file_hash`].
//!
//! Every operation is single-shot and stateless; nothing is cached across
//! calls. There is no atomicity across multi-file operations, no rollback,
//! and no coordination: concurrent mutations of overlapping paths (say,
//! `rmdir` racing `copy_recursive_sync` on one subtree) have undefined
//! outcome and must be serialized by the caller.
//!
//! Logging goes through the `tracing` facade. The process-wide default
//! subscriber is the default sink ([`logging::init`] installs a convenient
//! one); tests substitute a capturing subscriber via
//! `tracing::subscriber::with_default`.

pub mod entry;
pub mod errors;
pub mod logging;
mod ops;

pub use entry::{is_directory, EntryKind};
pub use errors::FsError;
pub use ops::{
    browse, cat, cat_sync, checksum, copy, copy_recursive_pattern, copy_recursive_sync, copy_sync,
    file_hash, mkdir, move_file, rm, rm_pattern, rmdir, touch, BrowseResult, HashOutcome,
    CHECKSUM_ERROR,
};
