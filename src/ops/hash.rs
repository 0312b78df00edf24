//! SHA-1 content hashing.
//!
//! Digests are lowercase hex, 40 characters. `file_hash` streams with a
//! bounded buffer, so it is the right tool for large files (unlike the
//! whole-file `copy_sync`). Its best-effort policy on read errors is
//! deliberate: the digest of whatever was consumed is still returned, with
//! `completed` cleared so callers can tell a partial digest from a full one.

use sha1::{Digest, Sha1};
use std::path::Path;
use tokio::io::AsyncReadExt;

use super::helpers::log_io_error;

/// Sentinel returned by [`checksum`] for empty input instead of a digest.
pub const CHECKSUM_ERROR: &str = "error";

const HASH_BUF_SIZE: usize = 64 * 1024;

/// Outcome of a streaming hash: the digest plus whether the whole file
/// contributed to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashOutcome {
    /// Lowercase hex SHA-1 digest of the bytes consumed.
    pub digest: String,
    /// False when an open or read error cut the stream short; the digest then
    /// covers only the prefix read before the failure.
    pub completed: bool,
}

/// Streaming SHA-1 of a file's content.
///
/// Never fails: on an open or read error the hash is finalized early over the
/// bytes consumed so far and returned with `completed == false` (an unreadable
/// file therefore yields the empty-input digest). The error itself goes to the
/// log sink.
pub async fn file_hash(path: &Path) -> HashOutcome {
    let mut hasher = Sha1::new();

    let mut file = match tokio::fs::File::open(path).await {
        Ok(file) => file,
        Err(e) => {
            log_io_error("open file for hashing", path, &e);
            return finalize(hasher, false);
        }
    };

    let mut buf = vec![0u8; HASH_BUF_SIZE];
    loop {
        match file.read(&mut buf).await {
            Ok(0) => return finalize(hasher, true),
            Ok(n) => hasher.update(&buf[..n]),
            Err(e) => {
                log_io_error("read file for hashing", path, &e);
                return finalize(hasher, false);
            }
        }
    }
}

fn finalize(hasher: Sha1, completed: bool) -> HashOutcome {
    HashOutcome {
        digest: hex::encode(hasher.finalize()),
        completed,
    }
}

/// Direct SHA-1 over in-memory text. Empty input returns the literal
/// [`CHECKSUM_ERROR`] sentinel rather than the empty-input digest.
pub fn checksum(text: &str) -> String {
    if text.is_empty() {
        return CHECKSUM_ERROR.to_string();
    }
    hex::encode(Sha1::digest(text.as_bytes()))
}
