//! # Text Digest Subcommand
//!
//! `hexsum text <TEXT>` — computes the digest of a literal string argument,
//! hashed as its UTF-8 bytes.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use hexsum_core::{digest_text, Algorithm};

/// Arguments for `hexsum text`.
#[derive(Args, Debug)]
pub struct TextArgs {
    /// The text to digest (hashed as its UTF-8 bytes).
    pub text: String,

    /// Digest algorithm: md5, sha1, sha256, or sha512 (case-insensitive).
    #[arg(short, long, default_value = "sha256")]
    pub algorithm: String,

    /// Emit the result as JSON instead of aligned text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct TextReport<'a> {
    algorithm: &'a str,
    digest: &'a str,
}

/// Execute the text subcommand.
pub fn run_text(args: &TextArgs) -> Result<u8> {
    let algorithm: Algorithm = args.algorithm.parse()?;
    let digest = digest_text(&args.text, algorithm);
    tracing::debug!(%algorithm, "computed text digest");

    if args.json {
        let report = TextReport {
            algorithm: algorithm.as_str(),
            digest: &digest,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("  algorithm: {}", algorithm.display_name());
        println!("  digest:    {digest}");
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(text: &str, algorithm: &str) -> TextArgs {
        TextArgs {
            text: text.to_string(),
            algorithm: algorithm.to_string(),
            json: false,
        }
    }

    #[test]
    fn run_text_succeeds_for_every_supported_algorithm() {
        for name in ["md5", "sha1", "sha256", "sha512"] {
            assert_eq!(run_text(&args("hello", name)).unwrap(), 0);
        }
    }

    #[test]
    fn run_text_accepts_uppercase_algorithm_names() {
        assert_eq!(run_text(&args("hello", "SHA512")).unwrap(), 0);
    }

    #[test]
    fn run_text_rejects_unsupported_algorithm() {
        let err = run_text(&args("hello", "crc32")).unwrap_err();
        assert!(err.to_string().contains("unsupported digest algorithm"));
    }

    #[test]
    fn run_text_json_output_succeeds() {
        let mut a = args("hello", "sha256");
        a.json = true;
        assert_eq!(run_text(&a).unwrap(), 0);
    }
}
