//! # Digest Algorithm
//!
//! Defines [`Algorithm`], the closed set of digest algorithms hexsum can
//! compute. The set is an enum, not strings: an unsupported identifier is a
//! typed error at the boundary, never a silently substituted default.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DigestError;

/// A supported digest algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// MD5 — 128-bit digest.
    Md5,
    /// SHA-1 — 160-bit digest.
    Sha1,
    /// SHA-256 — 256-bit digest.
    Sha256,
    /// SHA-512 — 512-bit digest.
    Sha512,
}

impl Algorithm {
    /// All supported algorithms, in identifier order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Md5,
        Algorithm::Sha1,
        Algorithm::Sha256,
        Algorithm::Sha512,
    ];

    /// Returns the lowercase algorithm identifier (`"md5"`, `"sha1"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }

    /// Returns the canonical display name (`"MD5"`, `"SHA-1"`, ...).
    ///
    /// These names match the candidate names emitted by the classifier, so
    /// a digest computed with an [`Algorithm`] always classifies to a
    /// candidate list containing its own display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA-1",
            Self::Sha256 => "SHA-256",
            Self::Sha512 => "SHA-512",
        }
    }

    /// Digest size in bits.
    pub fn bits(&self) -> usize {
        match self {
            Self::Md5 => 128,
            Self::Sha1 => 160,
            Self::Sha256 => 256,
            Self::Sha512 => 512,
        }
    }

    /// Digest length in hexadecimal characters (four bits per character).
    pub fn hex_len(&self) -> usize {
        self.bits() / 4
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = DigestError;

    /// Parses an algorithm identifier, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md5" => Ok(Self::Md5),
            "sha1" => Ok(Self::Sha1),
            "sha256" => Ok(Self::Sha256),
            "sha512" => Ok(Self::Sha512),
            _ => Err(DigestError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}
