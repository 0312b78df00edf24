//! I/O helper utilities.
//!
//! Small adapters that enrich an `io::Error` with the failing operation, the
//! path and a platform-aware hint, plus the log-and-continue shim used by the
//! synchronous tree-mutation family (whose contract is "never raise to the
//! caller; failures are observable through the log sink only").
//!
//! Usage:
//!   // in functions returning anyhow::Result<_>
//!   fs::create_dir_all(dir).map_err(io_error_with_help("create dir", dir))?;
//!
//!   // at the public log-only surface
//!   if let Err(e) = remove_tree(path) { log_io_error("remove directory tree", path, &e); }

use anyhow::anyhow;
use std::io;
use std::path::Path;
use tracing::error;

#[cfg(unix)]
use libc;

/// Format a human-friendly message with op/path plus platform-aware hints.
pub(crate) fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);

    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        match code {
            libc::EACCES | libc::EPERM => {
                msg.push_str(" — permission denied; check ownership and write permissions.");
            }
            libc::EXDEV => {
                msg.push_str(" — cross-filesystem; atomic rename not possible.");
            }
            libc::ENOENT => {
                msg.push_str(" — path not found; verify it exists.");
            }
            libc::EEXIST => {
                msg.push_str(" — already exists; pick a unique name or remove the target.");
            }
            libc::ENOTEMPTY => {
                msg.push_str(" — directory not empty; remove its contents first.");
            }
            libc::ENOSPC => {
                msg.push_str(" — insufficient space on device.");
            }
            _ => {}
        }
        #[cfg(windows)]
        match code {
            5 => msg.push_str(" — access denied; check permissions."), // ERROR_ACCESS_DENIED
            17 => msg.push_str(" — not same device; cross-filesystem move."), // ERROR_NOT_SAME_DEVICE
            2 | 3 => msg.push_str(" — path not found; verify it exists."), // FILE/PATH NOT FOUND
            80 => msg.push_str(" — already exists; pick a unique name."), // ERROR_FILE_EXISTS
            112 => msg.push_str(" — insufficient disk space."),           // ERROR_DISK_FULL
            _ => {}
        }
        msg.push_str(&format!(" [os code: {}]", code));
    } else {
        match e.kind() {
            io::ErrorKind::PermissionDenied => {
                msg.push_str(" — permission denied; check ownership and write permissions.");
            }
            io::ErrorKind::NotFound => {
                msg.push_str(" — path not found; verify it exists.");
            }
            io::ErrorKind::AlreadyExists => {
                msg.push_str(" — already exists; remove or choose a unique name.");
            }
            _ => {}
        }
    }

    msg
}

/// Adapter for anyhow::Result code.
/// Returns a closure suitable for `.map_err(...)` that converts io::Error -> anyhow::Error.
pub(crate) fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| anyhow!(build_message(op, path, &e))
}

/// Log an unexpected I/O failure at error level with the enriched message.
/// The log-only operations route every non-expected failure through here.
pub(crate) fn log_io_error(op: &str, path: &Path, e: &io::Error) {
    error!("{}", build_message(op, path, e));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn message_contains_op_and_path() {
        let p = PathBuf::from("/nonexistent/thing");
        let e = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let msg = build_message("remove file", &p, &e);
        assert!(msg.contains("remove file"));
        assert!(msg.contains("/nonexistent/thing"));
        assert!(msg.contains("path not found"));
    }

    #[test]
    fn adapter_produces_anyhow_error() {
        let p = PathBuf::from("x");
        let e = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = io_error_with_help("open file", &p)(e);
        let msg = format!("{}", err);
        assert!(msg.contains("open file"));
        assert!(msg.contains("permission denied"));
    }
}
