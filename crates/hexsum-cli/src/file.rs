//! # File Digest Subcommand
//!
//! `hexsum file <PATH>` — streams the file through the selected digest in
//! fixed-size chunks and prints the digest alongside the file's name and
//! size. Large files take as long as they take; the digest is computed on
//! the calling thread.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use hexsum_core::{digest_file, Algorithm};

/// Arguments for `hexsum file`.
#[derive(Args, Debug)]
pub struct FileArgs {
    /// Path of the file to digest.
    pub path: PathBuf,

    /// Digest algorithm: md5, sha1, sha256, or sha512 (case-insensitive).
    #[arg(short, long, default_value = "sha256")]
    pub algorithm: String,

    /// Emit the result as JSON instead of aligned text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct FileReport<'a> {
    path: &'a str,
    size_bytes: u64,
    algorithm: &'a str,
    digest: &'a str,
}

/// Render a byte count the way a person reads one.
fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MiB", bytes as f64 / (1024.0 * 1024.0))
    }
}

/// Execute the file subcommand.
pub fn run_file(args: &FileArgs) -> Result<u8> {
    let algorithm: Algorithm = args.algorithm.parse()?;

    let digest = digest_file(&args.path, algorithm)?;
    let size = std::fs::metadata(&args.path)
        .with_context(|| format!("failed to read metadata for {}", args.path.display()))?
        .len();
    tracing::debug!(path = %args.path.display(), size, %algorithm, "computed file digest");

    if args.json {
        let path_display = args.path.display().to_string();
        let report = FileReport {
            path: &path_display,
            size_bytes: size,
            algorithm: algorithm.as_str(),
            digest: &digest,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("  file:      {}", args.path.display());
        println!("  size:      {}", format_size(size));
        println!("  algorithm: {}", algorithm.display_name());
        println!("  digest:    {digest}");
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexsum_core::{digest_text, DigestError};

    fn args(path: PathBuf, algorithm: &str) -> FileArgs {
        FileArgs {
            path,
            algorithm: algorithm.to_string(),
            json: false,
        }
    }

    #[test]
    fn run_file_digests_an_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt");
        std::fs::write(&path, "file body").unwrap();

        assert_eq!(run_file(&args(path, "sha256")).unwrap(), 0);
    }

    #[test]
    fn run_file_reports_missing_file_as_file_not_found() {
        let err = run_file(&args(PathBuf::from("/nonexistent/path"), "sha256")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DigestError>(),
            Some(DigestError::FileNotFound { .. })
        ));
    }

    #[test]
    fn run_file_rejects_unsupported_algorithm_before_touching_the_path() {
        let err = run_file(&args(PathBuf::from("/nonexistent/path"), "whirlpool")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DigestError>(),
            Some(DigestError::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn file_and_text_digests_agree() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agree.txt");
        std::fs::write(&path, "same bytes").unwrap();

        assert_eq!(
            digest_file(&path, Algorithm::Sha1).unwrap(),
            digest_text("same bytes", Algorithm::Sha1)
        );
    }

    #[test]
    fn format_size_picks_sensible_units() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KiB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MiB");
    }
}
