//! # Hash Classifier
//!
//! Identifies which digest algorithm(s) could plausibly have produced an
//! unlabeled string, based on length and character-set rules. This is a
//! heuristic lookup, not verification: algorithms that share an output
//! length are all reported as candidates, and no claim of certainty is
//! ever made beyond the length match.
//!
//! ## Totality Invariant
//!
//! `classify()` accepts any string — empty, unicode, pasted garbage — and
//! always returns a well-formed [`ClassificationReport`]. Unclassifiable
//! input is communicated through [`HashKind::Invalid`] and
//! [`HashKind::Unknown`], never through an error or a panic. This is what
//! makes the function safe to feed raw user paste buffers.

use serde::Serialize;

/// Classification outcome for one input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HashKind {
    /// Not a hexadecimal string (contains non-hex characters, or is empty).
    Invalid,
    /// Valid hex, but no known digest algorithm produces this length.
    Unknown,
    /// 32 hex characters — MD5.
    Md5,
    /// 40 hex characters — SHA-1.
    Sha1,
    /// 56 hex characters — SHA-224.
    Sha224,
    /// 64 hex characters — SHA-256 family.
    Sha256,
    /// 96 hex characters — SHA-384.
    Sha384,
    /// 128 hex characters — SHA-512 family.
    Sha512,
}

impl HashKind {
    /// Returns the kind label used in rendered reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invalid => "Invalid",
            Self::Unknown => "Unknown",
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA1",
            Self::Sha224 => "SHA224",
            Self::Sha256 => "SHA256",
            Self::Sha384 => "SHA384",
            Self::Sha512 => "SHA512",
        }
    }
}

impl std::fmt::Display for HashKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the length table: hex length, kind, digest size in bits, and
/// every algorithm known to produce that length.
struct KnownLength {
    len: usize,
    kind: HashKind,
    bits: usize,
    candidates: &'static [&'static str],
}

/// Known digest lengths. Lengths shared by multiple algorithm families
/// (64 and 128) list every candidate rather than picking one.
const KNOWN_LENGTHS: &[KnownLength] = &[
    KnownLength {
        len: 32,
        kind: HashKind::Md5,
        bits: 128,
        candidates: &["MD5"],
    },
    KnownLength {
        len: 40,
        kind: HashKind::Sha1,
        bits: 160,
        candidates: &["SHA-1"],
    },
    KnownLength {
        len: 56,
        kind: HashKind::Sha224,
        bits: 224,
        candidates: &["SHA-224"],
    },
    KnownLength {
        len: 64,
        kind: HashKind::Sha256,
        bits: 256,
        candidates: &["SHA-256", "SHA3-256"],
    },
    KnownLength {
        len: 96,
        kind: HashKind::Sha384,
        bits: 384,
        candidates: &["SHA-384"],
    },
    KnownLength {
        len: 128,
        kind: HashKind::Sha512,
        bits: 512,
        candidates: &["SHA-512", "SHA3-512"],
    },
];

/// The classifier's output: kind, normalized length, hex validity, the
/// candidate algorithms consistent with the length, and a human-readable
/// description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationReport {
    /// Classification outcome.
    pub kind: HashKind,
    /// Character count of the normalized (trimmed, lowercased) input.
    pub length: usize,
    /// Whether the normalized input is a non-empty all-hex string.
    pub is_hex: bool,
    /// Algorithms whose digest length matches; empty for Invalid/Unknown.
    pub candidates: Vec<&'static str>,
    /// Human-readable explanation of the classification.
    pub description: String,
}

/// Classify an arbitrary string as a possible hexadecimal digest.
///
/// The input is normalized (leading/trailing whitespace trimmed, remainder
/// lowercased) before any check; the reported `length` is always the
/// normalized length. An empty normalized input is explicitly Invalid —
/// no known digest has length zero, so emptiness is decided before the
/// character scan rather than left to vacuous all-hex semantics.
pub fn classify(raw: &str) -> ClassificationReport {
    let normalized = raw.trim().to_lowercase();
    let length = normalized.chars().count();

    let is_hex = !normalized.is_empty()
        && normalized.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'));

    if !is_hex {
        let description = if normalized.is_empty() {
            "input is empty; not a hexadecimal digest".to_string()
        } else {
            "input contains characters outside 0-9a-f; not a hexadecimal digest".to_string()
        };
        return ClassificationReport {
            kind: HashKind::Invalid,
            length,
            is_hex: false,
            candidates: Vec::new(),
            description,
        };
    }

    match KNOWN_LENGTHS.iter().find(|entry| entry.len == length) {
        Some(entry) => ClassificationReport {
            kind: entry.kind,
            length,
            is_hex: true,
            candidates: entry.candidates.to_vec(),
            description: format!(
                "possible {} digest ({} bits, {} hex characters)",
                entry.candidates.join(" or "),
                entry.bits,
                entry.len
            ),
        },
        None => ClassificationReport {
            kind: HashKind::Unknown,
            length,
            is_hex: true,
            candidates: Vec::new(),
            description: format!(
                "hexadecimal string of {length} characters matches no known digest length"
            ),
        },
    }
}
