//! Entry classification.
//! One lstat per entry drives every file-vs-directory dispatch in the crate;
//! symlinks are never followed, so a symlink classifies as a file.

use std::fs;
use std::io;
use std::path::Path;

/// Two-variant tag for a filesystem entry, resolved by a single stat call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    /// Classify `path` without following symlinks.
    pub fn classify(path: &Path) -> io::Result<EntryKind> {
        let meta = fs::symlink_metadata(path)?;
        if meta.file_type().is_dir() {
            Ok(EntryKind::Directory)
        } else {
            Ok(EntryKind::File)
        }
    }

    /// Classify a directory entry from its readily available file type,
    /// avoiding a second stat on platforms where `read_dir` already knows it.
    pub fn of_entry(entry: &fs::DirEntry) -> io::Result<EntryKind> {
        let ftype = entry.file_type()?;
        if ftype.is_dir() {
            Ok(EntryKind::Directory)
        } else {
            Ok(EntryKind::File)
        }
    }
}

/// Whether `path` names a directory. Missing paths and stat failures are `false`.
pub fn is_directory(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|m| m.file_type().is_dir())
        .unwrap_or(false)
}
