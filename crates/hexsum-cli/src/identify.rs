//! # Identify Subcommand
//!
//! `hexsum identify <HASH>` — runs the classifier over an arbitrary pasted
//! string and renders the resulting report. Classification always succeeds;
//! Invalid and Unknown are outcomes, not errors, so the exit code is 0
//! either way.

use anyhow::Result;
use clap::Args;

use hexsum_core::classify;

/// Arguments for `hexsum identify`.
#[derive(Args, Debug)]
pub struct IdentifyArgs {
    /// The string to classify (any content, including pasted garbage).
    pub hash: String,

    /// Emit the report as JSON instead of aligned text.
    #[arg(long)]
    pub json: bool,
}

/// Execute the identify subcommand.
pub fn run_identify(args: &IdentifyArgs) -> Result<u8> {
    let report = classify(&args.hash);
    tracing::debug!(kind = %report.kind, length = report.length, "classified input");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let candidates = if report.candidates.is_empty() {
            "(none)".to_string()
        } else {
            report.candidates.join(", ")
        };
        println!("  kind:        {}", report.kind);
        println!("  length:      {}", report.length);
        println!("  hex:         {}", if report.is_hex { "yes" } else { "no" });
        println!("  candidates:  {candidates}");
        println!("  description: {}", report.description);
    }
    Ok(0)
}
