//! # hexsum-cli — Command-Line Front End for hexsum
//!
//! Provides the `hexsum` binary. Each subcommand lives in its own module
//! with a clap `Args` struct and a `run_*` handler returning a process
//! exit code; `main` parses, dispatches, and renders errors.
//!
//! ## Subcommands
//!
//! - `hexsum text` — digest of a literal text argument.
//! - `hexsum file` — digest of a file, streamed in fixed-size chunks.
//! - `hexsum identify` — classify an unlabeled hex string.
//! - `hexsum compare` — normalized digest comparison with a scriptable
//!   exit code.

pub mod compare;
pub mod file;
pub mod identify;
pub mod text;
