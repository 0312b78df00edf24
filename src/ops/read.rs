//! Content access: full-text reads and directory listings.
//!
//! Reads follow the availability-first contract: a missing file yields an
//! empty string with a warning, any other failure yields an empty string with
//! an error log. Callers that need to distinguish "empty file" from "missing
//! file" should stat first.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

use super::helpers::log_io_error;

/// Point-in-time listing of a directory's immediate children, split by kind.
/// Paths are joined onto the browsed directory; order matches the underlying
/// listing, with no sorting guarantee. The snapshot goes stale as soon as the
/// directory changes.
#[derive(Debug, Clone, Default)]
pub struct BrowseResult {
    pub folders: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

/// Read full file content as text, without blocking the caller.
pub async fn cat(path: &Path) -> String {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) => {
            report_read_failure(path, &e);
            String::new()
        }
    }
}

/// Blocking variant of [`cat`], same empty-string contract.
pub fn cat_sync(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            report_read_failure(path, &e);
            String::new()
        }
    }
}

fn report_read_failure(path: &Path, e: &io::Error) {
    if e.kind() == io::ErrorKind::NotFound {
        warn!("Can't read {}, doesn't exist", path.display());
    } else {
        log_io_error("read file", path, e);
    }
}

/// List the immediate children of `dir`, classified by a per-entry stat that
/// does not follow symlinks. A listing failure yields an empty snapshot with
/// an error log.
pub async fn browse(dir: &Path) -> BrowseResult {
    let mut out = BrowseResult::default();

    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) => {
            log_io_error("list directory", dir, &e);
            return out;
        }
    };

    loop {
        match entries.next_entry().await {
            Ok(Some(entry)) => {
                let path = entry.path();
                match entry.file_type().await {
                    Ok(ftype) if ftype.is_dir() => out.folders.push(path),
                    Ok(_) => out.files.push(path),
                    Err(e) => log_io_error("classify entry", &path, &e),
                }
            }
            Ok(None) => break,
            Err(e) => {
                log_io_error("list directory", dir, &e);
                break;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn cat_sync_reads_content() {
        let td = tempdir().unwrap();
        let f = td.path().join("hello.txt");
        fs::write(&f, "hello there").unwrap();
        assert_eq!(cat_sync(&f), "hello there");
    }

    #[test]
    fn cat_sync_missing_yields_empty() {
        let td = tempdir().unwrap();
        assert_eq!(cat_sync(&td.path().join("missing")), "");
    }

    #[tokio::test]
    async fn cat_missing_yields_empty() {
        let td = tempdir().unwrap();
        assert_eq!(cat(&td.path().join("missing")).await, "");
    }

    #[tokio::test]
    async fn browse_splits_folders_and_files() {
        let td = tempdir().unwrap();
        fs::create_dir(td.path().join("sub")).unwrap();
        fs::write(td.path().join("a.txt"), b"a").unwrap();
        fs::write(td.path().join("b.txt"), b"b").unwrap();

        let out = browse(td.path()).await;

        assert_eq!(out.folders, vec![td.path().join("sub")]);
        let mut files = out.files.clone();
        files.sort();
        assert_eq!(files, vec![td.path().join("a.txt"), td.path().join("b.txt")]);
    }

    #[tokio::test]
    async fn browse_missing_dir_yields_empty_snapshot() {
        let td = tempdir().unwrap();
        let out = browse(&td.path().join("void")).await;
        assert!(out.folders.is_empty());
        assert!(out.files.is_empty());
    }
}
