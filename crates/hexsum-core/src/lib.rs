//! # hexsum-core — Digest Computation and Hash-Type Identification
//!
//! This crate is the core of the hexsum toolchain. It provides two
//! independent components, both invoked by presentation-layer callers
//! (the `hexsum` CLI) and neither calling the other:
//!
//! - **Digest provider** — computes lowercase hexadecimal MD5, SHA-1,
//!   SHA-256, and SHA-512 digests of in-memory text and of files streamed
//!   in fixed-size chunks.
//! - **Hash classifier** — takes an arbitrary string and reports which
//!   digest algorithm(s) could plausibly have produced it, based on length
//!   and character-set rules. A total function: garbage in, report out.
//!
//! A small comparison helper rounds out the integrity-verification flow:
//! normalize two digests and compare them in constant time.
//!
//! ## Crate Policy
//!
//! - No dependencies on other hexsum crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests; the digest provider
//!   returns typed errors, the classifier returns none at all.

pub mod algorithm;
pub mod classify;
pub mod compare;
pub mod digest;
pub mod error;

// Re-export primary types for ergonomic imports.
pub use algorithm::Algorithm;
pub use classify::{classify, ClassificationReport, HashKind};
pub use compare::digests_match;
pub use digest::{digest_bytes, digest_file, digest_text};
pub use error::DigestError;
