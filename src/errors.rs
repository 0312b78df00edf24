//! Typed error definitions for fs_extended.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FsError {
    #[error("Source path not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("Path has no file name component: {0}")]
    MissingFileName(PathBuf),
}
