use std::fs::File;
use std::io::Read;
use std::path::Path;

use md5::{Digest, Md5};
use sha1::Sha1;
use tracing::debug;

use crate::{CHUNK_SIZE, FingerprintError};

/// Identifying hashes of a ROM file.
///
/// All hex strings are uppercase and fixed-width: 32 chars for MD5,
/// 40 for SHA-1, 8 for CRC32.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint {
    pub md5: String,
    pub sha1: String,
    pub crc32: String,
    /// Number of bytes hashed.
    pub size: u64,
    pub file_name: String,
}

/// Streams `reader` through the three hashers in [`CHUNK_SIZE`] reads.
///
/// `file_name` is carried into the result untouched.
pub fn fingerprint_reader<R: Read>(
    mut reader: R,
    file_name: &str,
) -> Result<Fingerprint, FingerprintError> {
    let mut md5 = Md5::new();
    let mut sha1 = Sha1::new();
    let mut crc = crc32fast::Hasher::new();
    let mut size = 0u64;

    let mut buf = vec![0u8; CHUNK_SIZE];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        md5.update(&buf[..n]);
        sha1.update(&buf[..n]);
        crc.update(&buf[..n]);
        size += n as u64;
    }

    Ok(Fingerprint {
        md5: hex::encode_upper(md5.finalize()),
        sha1: hex::encode_upper(sha1.finalize()),
        crc32: format!("{:08X}", crc.finalize()),
        size,
        file_name: file_name.to_string(),
    })
}

/// Computes the fingerprint of the file at `path` without loading it whole.
pub fn fingerprint_file(path: &Path) -> Result<Fingerprint, FingerprintError> {
    let unreadable = |source| FingerprintError::Unreadable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unreadable)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let fp = match fingerprint_reader(file, &file_name) {
        Err(FingerprintError::Io(source)) => return Err(unreadable(source)),
        other => other?,
    };

    debug!(
        path = %path.display(),
        size = fp.size,
        crc32 = %fp.crc32,
        "fingerprinted file"
    );
    Ok(fp)
}
