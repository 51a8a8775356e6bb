//! # Digest Comparison
//!
//! Compares two hex digests after normalization, for integrity-verification
//! workflows where a computed digest is checked against a published one.
//! The comparison over the normalized bytes is constant-time.

use subtle::ConstantTimeEq;

/// Normalize a digest for comparison: trim, drop interior spaces (pasted
/// digests are often split into groups), lowercase.
fn normalize(input: &str) -> String {
    input.trim().replace(' ', "").to_lowercase()
}

/// Whether two digest strings are equal after normalization.
///
/// Inputs of different lengths never match; equal-length inputs are
/// compared in constant time.
pub fn digests_match(first: &str, second: &str) -> bool {
    let a = normalize(first);
    let b = normalize(second);
    bool::from(a.as_bytes().ct_eq(b.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::Algorithm;
    use crate::digest::digest_text;

    #[test]
    fn identical_digests_match() {
        let d = digest_text("payload", Algorithm::Sha256);
        assert!(digests_match(&d, &d));
    }

    #[test]
    fn case_and_spacing_differences_are_normalized_away() {
        assert!(digests_match(
            "  D41D8CD9 8F00B204 E9800998 ECF8427E  ",
            "d41d8cd98f00b204e9800998ecf8427e"
        ));
    }

    #[test]
    fn different_digests_do_not_match() {
        let a = digest_text("payload", Algorithm::Sha256);
        let b = digest_text("payload!", Algorithm::Sha256);
        assert!(!digests_match(&a, &b));
    }

    #[test]
    fn different_lengths_do_not_match() {
        let md5 = digest_text("payload", Algorithm::Md5);
        let sha256 = digest_text("payload", Algorithm::Sha256);
        assert!(!digests_match(&md5, &sha256));
    }
}
