//! # Error Types
//!
//! Structured errors for digest computation. All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations.
//!
//! Classification deliberately has no error type: `classify()` is a total
//! function that reports unclassifiable input as data (`HashKind::Invalid`
//! or `HashKind::Unknown`), never as an error.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from digest computation.
///
/// An unsupported algorithm name and a missing file are distinct variants
/// so callers can render distinct messages; neither is ever silently
/// defaulted away.
#[derive(Error, Debug)]
pub enum DigestError {
    /// The requested algorithm is not one of the four supported identifiers.
    #[error("unsupported digest algorithm {0:?}: expected one of md5, sha1, sha256, sha512")]
    UnsupportedAlgorithm(String),

    /// The file to digest does not exist.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// The path that could not be opened.
        path: PathBuf,
    },

    /// An I/O failure while opening or reading the file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_algorithm_display_lists_supported_set() {
        let err = DigestError::UnsupportedAlgorithm("crc32".to_string());
        let msg = format!("{err}");
        assert!(msg.contains("crc32"));
        assert!(msg.contains("md5"));
        assert!(msg.contains("sha512"));
    }

    #[test]
    fn file_not_found_display_names_the_path() {
        let err = DigestError::FileNotFound {
            path: PathBuf::from("/tmp/missing.bin"),
        };
        assert!(format!("{err}").contains("/tmp/missing.bin"));
    }

    #[test]
    fn io_error_converts_via_from() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = DigestError::from(io);
        assert!(matches!(err, DigestError::Io(_)));
        assert!(format!("{err}").contains("denied"));
    }
}
