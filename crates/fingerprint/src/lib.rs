//! Content fingerprinting for ROM files.
//!
//! A [`Fingerprint`] is the (MD5, SHA-1, CRC32) triple the ScreenScraper
//! catalog uses to identify a dump, plus the file size and name that go
//! along with it in a lookup request.

mod fingerprint;

use std::path::PathBuf;

pub use fingerprint::{Fingerprint, fingerprint_file, fingerprint_reader};

/// Read size used while streaming a file through the hashers: 64 KiB.
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Errors produced while fingerprinting a file.
#[derive(Debug, thiserror::Error)]
pub enum FingerprintError {
    #[error("cannot read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
