//! Asynchronous file transfer.
//! `move_file` attempts an atomic rename; only a cross-device rename failure
//! falls back to the streamed copy+delete of [`copy`]. Any other rename error
//! surfaces directly.

use anyhow::{Context, Result};
use std::io;
use std::path::Path;
use tokio::io::{AsyncWriteExt, BufReader, BufWriter};
use tracing::{info, warn};

use super::helpers::io_error_with_help;

const COPY_BUF_SIZE: usize = 1024 * 1024; // 1 MiB buffers

/// Streamed copy of `old_path` to `new_path`, then deletion of the source.
///
/// Memory stays bounded regardless of file size. Success is reported only
/// once the source file has been removed, so a completed call is a completed
/// move-via-copy. Any read or write failure is delivered exactly once through
/// the returned `Result`; a failure before the delete leaves the source in
/// place.
pub async fn copy(old_path: &Path, new_path: &Path) -> Result<()> {
    let src = tokio::fs::File::open(old_path)
        .await
        .map_err(io_error_with_help("open source file", old_path))?;
    let dst = tokio::fs::File::create(new_path)
        .await
        .map_err(io_error_with_help("create destination file", new_path))?;

    let mut reader = BufReader::with_capacity(COPY_BUF_SIZE, src);
    let mut writer = BufWriter::with_capacity(COPY_BUF_SIZE, dst);

    let bytes = tokio::io::copy(&mut reader, &mut writer)
        .await
        .with_context(|| {
            format!(
                "streamed copy '{}' -> '{}'",
                old_path.display(),
                new_path.display()
            )
        })?;
    writer
        .flush()
        .await
        .map_err(io_error_with_help("flush destination file", new_path))?;

    tokio::fs::remove_file(old_path)
        .await
        .map_err(io_error_with_help("remove original file", old_path))?;

    info!(
        src = %old_path.display(),
        dest = %new_path.display(),
        bytes,
        "Copied and removed source"
    );
    Ok(())
}

/// Move `old_path` to `new_path`, preserving move semantics across devices.
///
/// A plain rename is tried first. Iff the rename fails because the two paths
/// live on different devices, the streamed copy+delete fallback runs instead;
/// every other rename error is returned as-is.
pub async fn move_file(old_path: &Path, new_path: &Path) -> Result<()> {
    match tokio::fs::rename(old_path, new_path).await {
        Ok(()) => {
            info!(
                src = %old_path.display(),
                dest = %new_path.display(),
                "Renamed file atomically"
            );
            Ok(())
        }
        Err(e) if is_cross_device(&e) => {
            warn!(
                error = %e,
                "Rename crossed devices, falling back to streamed copy+delete"
            );
            copy(old_path, new_path).await
        }
        Err(e) => Err(io_error_with_help("rename file", old_path)(e)),
    }
}

/// Whether a rename failure is the cross-device constraint specifically.
fn is_cross_device(e: &io::Error) -> bool {
    #[cfg(unix)]
    {
        e.raw_os_error() == Some(libc::EXDEV)
    }
    #[cfg(windows)]
    {
        e.raw_os_error() == Some(17) // ERROR_NOT_SAME_DEVICE
    }
    #[cfg(not(any(unix, windows)))]
    {
        let _ = e;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn copy_removes_source_after_transfer() {
        let td = tempdir().unwrap();
        let src = td.path().join("a.bin");
        let dst = td.path().join("b.bin");
        fs::write(&src, b"payload").unwrap();

        copy(&src, &dst).await.unwrap();

        assert!(!src.exists());
        assert_eq!(fs::read(&dst).unwrap(), b"payload");
    }

    #[tokio::test]
    async fn copy_missing_source_errors_and_creates_nothing() {
        let td = tempdir().unwrap();
        let src = td.path().join("ghost");
        let dst = td.path().join("out");

        let err = copy(&src, &dst).await.unwrap_err();
        assert!(format!("{}", err).contains("open source file"));
        assert!(!dst.exists());
    }

    #[tokio::test]
    async fn move_file_same_device_renames() {
        let td = tempdir().unwrap();
        let src = td.path().join("from.txt");
        let dst = td.path().join("to.txt");
        fs::write(&src, b"move me").unwrap();

        move_file(&src, &dst).await.unwrap();

        assert!(!src.exists());
        assert_eq!(fs::read_to_string(&dst).unwrap(), "move me");
    }

    #[tokio::test]
    async fn move_file_missing_source_surfaces_error() {
        let td = tempdir().unwrap();
        let err = move_file(&td.path().join("nope"), &td.path().join("dst"))
            .await
            .unwrap_err();
        assert!(format!("{}", err).contains("rename file"));
    }
}
