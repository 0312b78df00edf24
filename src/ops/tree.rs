//! Tree mutation: rm, rmdir, mkdir, rm_pattern.
//!
//! Every operation here is synchronous and log-only: expected conditions
//! (missing target on delete, existing target on create) are warnings and
//! count as success; anything else is logged at error level and the call
//! returns. Nothing is raised to the caller.
//!
//! `rmdir` is a sequential depth-first walk with fail-fast semantics: the
//! first entry that cannot be deleted aborts the walk, siblings after it are
//! left in place and nothing already deleted is restored.

use regex::Regex;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::entry::EntryKind;

use super::helpers::log_io_error;

/// Remove a single file. Missing files are a warning, not a failure.
pub fn rm(path: &Path) {
    info!("Removing file: {}", path.display());

    match fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("Can't remove {}, doesn't exist", path.display());
        }
        Err(e) => log_io_error("remove file", path, &e),
    }
}

/// Recursively delete a directory and everything under it.
/// No-op if `path` does not exist.
pub fn rmdir(path: &Path) {
    if !path.exists() {
        return;
    }

    info!("Removing directory: {}", path.display());

    if let Err(e) = remove_tree(path) {
        log_io_error("remove directory tree", path, &e);
    }
}

/// Depth-first delete. Fail-fast: the first error propagates and the
/// remaining siblings are not visited.
fn remove_tree(dir: &Path) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let child = entry.path();

        match EntryKind::of_entry(&entry)? {
            EntryKind::Directory => {
                debug!("Descending into: {}", child.display());
                remove_tree(&child)?;
            }
            EntryKind::File => fs::remove_file(&child)?,
        }
    }

    fs::remove_dir(dir)
}

/// Create a directory and all missing ancestors, root-to-leaf.
///
/// Ancestors are resolved one segment at a time by recursing on the parent
/// prefix before creating the leaf, rather than through a bulk
/// create-all-parents primitive. Empty paths are a no-op; an existing target
/// is a warning and counts as success.
pub fn mkdir(path: &Path) {
    if path.as_os_str().is_empty() {
        return;
    }

    info!("Creating directory: {}", path.display());

    if let Some(parent) = path.parent() {
        // Stop recursing at the filesystem root or a bare relative prefix.
        if parent.file_name().is_some() {
            mkdir(parent);
        }
    }

    match fs::create_dir(path) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            warn!("Can't make {}, already exists", path.display());
        }
        Err(e) => log_io_error("create directory", path, &e),
    }
}

/// Delete the immediate children of `root` whose *name* (not full path)
/// matches `pattern`. Matched directories are removed recursively via
/// [`rmdir`]; matched files via [`rm`]. Everything else is left untouched.
pub fn rm_pattern(root: &Path, pattern: &Regex) {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            log_io_error("list directory", root, &e);
            return;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log_io_error("list directory", root, &e);
                return;
            }
        };

        // Non-UTF8 names are matched through their lossy rendering.
        let name = entry.file_name();
        if !pattern.is_match(&name.to_string_lossy()) {
            continue;
        }

        let child = entry.path();
        match EntryKind::of_entry(&entry) {
            Ok(EntryKind::Directory) => rmdir(&child),
            Ok(EntryKind::File) => rm(&child),
            Err(e) => log_io_error("classify entry", &child, &e),
        }
    }
}
