//! # Digest Provider
//!
//! Computes lowercase hexadecimal digests of in-memory bytes and of files.
//! Files are streamed through the incremental hasher in fixed-size chunks,
//! so peak memory stays bounded regardless of file size.
//!
//! Both entry points are pure functions of their input: no shared state,
//! one independent file handle per call, safe to invoke concurrently.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

use crate::algorithm::Algorithm;
use crate::error::DigestError;

/// Chunk size for streaming file reads.
const FILE_CHUNK_SIZE: usize = 8192;

/// Incremental hasher state for one digest computation.
enum Hasher {
    Md5(Md5),
    Sha1(Sha1),
    Sha256(Sha256),
    Sha512(Sha512),
}

impl Hasher {
    fn new(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Md5 => Self::Md5(Md5::new()),
            Algorithm::Sha1 => Self::Sha1(Sha1::new()),
            Algorithm::Sha256 => Self::Sha256(Sha256::new()),
            Algorithm::Sha512 => Self::Sha512(Sha512::new()),
        }
    }

    fn update(&mut self, data: &[u8]) {
        match self {
            Self::Md5(h) => h.update(data),
            Self::Sha1(h) => h.update(data),
            Self::Sha256(h) => h.update(data),
            Self::Sha512(h) => h.update(data),
        }
    }

    fn finalize_hex(self) -> String {
        match self {
            Self::Md5(h) => hex::encode(h.finalize()),
            Self::Sha1(h) => hex::encode(h.finalize()),
            Self::Sha256(h) => hex::encode(h.finalize()),
            Self::Sha512(h) => hex::encode(h.finalize()),
        }
    }
}

/// Compute the digest of a byte slice in one pass.
///
/// Returns the lowercase hex encoding; its length is fixed per algorithm
/// (MD5 32, SHA-1 40, SHA-256 64, SHA-512 128).
pub fn digest_bytes(data: &[u8], algorithm: Algorithm) -> String {
    let mut hasher = Hasher::new(algorithm);
    hasher.update(data);
    hasher.finalize_hex()
}

/// Compute the digest of a string's UTF-8 bytes.
pub fn digest_text(text: &str, algorithm: Algorithm) -> String {
    digest_bytes(text.as_bytes(), algorithm)
}

/// Compute the digest of a file, streaming it in 8192-byte chunks.
///
/// A missing path yields [`DigestError::FileNotFound`]; any other open or
/// read failure (including a handle closed mid-stream by the caller) yields
/// [`DigestError::Io`]. A partial read never produces a digest.
pub fn digest_file(path: &Path, algorithm: Algorithm) -> Result<String, DigestError> {
    let mut file = File::open(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            DigestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DigestError::Io(e)
        }
    })?;

    let mut hasher = Hasher::new(algorithm);
    let mut buf = [0u8; FILE_CHUNK_SIZE];
    loop {
        let read = match file.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(DigestError::Io(e)),
        };
        hasher.update(&buf[..read]);
    }
    Ok(hasher.finalize_hex())
}
