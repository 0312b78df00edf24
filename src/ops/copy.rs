//! Synchronous file transfer: touch, single-file copy and the recursive
//! copy family.
//!
//! `copy_sync` is deliberately a full read-then-write — the entire file is
//! held in memory at once. That is a documented scalability bound, not an
//! oversight; large files belong on the streamed async [`copy`] path.
//!
//! [`copy`]: super::transfer::copy

use anyhow::Result;
use regex::Regex;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::entry::{is_directory, EntryKind};
use crate::errors::FsError;

use super::helpers::io_error_with_help;
use super::helpers::log_io_error;
use super::tree::mkdir;

/// Create `path` as an empty file, truncating any existing content.
/// The one synchronous operation whose failures propagate to the caller.
pub fn touch(path: &Path) -> io::Result<()> {
    fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map(|_| ())
}

/// Resolve where a single-file copy lands: an existing directory target
/// redirects to `<target>/<basename(source)>`.
fn file_destination(source: &Path, target: &Path) -> Result<PathBuf, FsError> {
    if is_directory(target) {
        let name = source
            .file_name()
            .ok_or_else(|| FsError::MissingFileName(source.to_path_buf()))?;
        Ok(target.join(name))
    } else {
        Ok(target.to_path_buf())
    }
}

/// Copy a single file. Whole-content read-then-write; see the module docs
/// for the memory bound. Failures are logged, never returned.
pub fn copy_sync(source: &Path, target: &Path) {
    let dest = match file_destination(source, target) {
        Ok(dest) => dest,
        Err(e) => {
            warn!("Can't copy {}: {}", source.display(), e);
            return;
        }
    };

    debug!("Copying file: {} -> {}", source.display(), dest.display());

    let content = match fs::read(source) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("Can't copy {}, doesn't exist", source.display());
            return;
        }
        Err(e) => {
            log_io_error("read source file", source, &e);
            return;
        }
    };

    if let Err(e) = fs::write(&dest, content) {
        log_io_error("write destination file", &dest, &e);
    }
}

/// Recursively copy `source` (file or directory tree) into a directory named
/// after `source`'s basename under `target`, creating it if absent.
/// Failures are logged, never returned.
pub fn copy_recursive_sync(source: &Path, target: &Path) {
    if let Err(e) = copy_recursive(source, target) {
        warn!("Recursive copy of {} failed: {}", source.display(), e);
    }
}

fn copy_recursive(source: &Path, target: &Path) -> Result<()> {
    let kind = match EntryKind::classify(source) {
        Ok(kind) => kind,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(FsError::SourceNotFound(source.to_path_buf()).into());
        }
        Err(e) => return Err(io_error_with_help("stat source", source)(e)),
    };

    if kind == EntryKind::File {
        copy_sync(source, target);
        return Ok(());
    }

    let name = source
        .file_name()
        .ok_or_else(|| FsError::MissingFileName(source.to_path_buf()))?;
    let dest = target.join(name);
    mkdir(&dest);

    let entries = fs::read_dir(source).map_err(io_error_with_help("list directory", source))?;
    for entry in entries {
        let entry = entry.map_err(io_error_with_help("list directory", source))?;
        let child = entry.path();

        match EntryKind::of_entry(&entry).map_err(io_error_with_help("classify entry", &child))? {
            EntryKind::Directory => copy_recursive(&child, &dest)?,
            EntryKind::File => copy_sync(&child, &dest),
        }
    }

    Ok(())
}

/// Copy the immediate children of `source` whose *name* matches `pattern`
/// into `target`: matched directories recursively, matched files directly.
/// Non-matching entries are left behind. Failures are logged, never returned.
pub fn copy_recursive_pattern(source: &Path, target: &Path, pattern: &Regex) {
    let entries = match fs::read_dir(source) {
        Ok(entries) => entries,
        Err(e) => {
            log_io_error("list directory", source, &e);
            return;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log_io_error("list directory", source, &e);
                return;
            }
        };

        let name = entry.file_name();
        if !pattern.is_match(&name.to_string_lossy()) {
            continue;
        }

        let child = entry.path();
        match EntryKind::of_entry(&entry) {
            Ok(EntryKind::Directory) => copy_recursive_sync(&child, target),
            Ok(EntryKind::File) => copy_sync(&child, target),
            Err(e) => log_io_error("classify entry", &child, &e),
        }
    }
}
