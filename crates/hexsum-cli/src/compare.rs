//! # Compare Subcommand
//!
//! `hexsum compare <FIRST> <SECOND>` — normalized digest comparison for
//! integrity checks. Exits 0 on match and 1 on mismatch so the command
//! composes in shell scripts.

use anyhow::Result;
use clap::Args;

use hexsum_core::digests_match;

/// Arguments for `hexsum compare`.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First digest (e.g. the computed one).
    pub first: String,

    /// Second digest (e.g. the published one).
    pub second: String,
}

/// Execute the compare subcommand.
pub fn run_compare(args: &CompareArgs) -> Result<u8> {
    if digests_match(&args.first, &args.second) {
        println!("  result: match");
        Ok(0)
    } else {
        println!("  result: mismatch");
        Ok(1)
    }
}
