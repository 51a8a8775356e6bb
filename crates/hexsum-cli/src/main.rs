//! # hexsum CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros; verbosity maps to a tracing `EnvFilter`.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hexsum_cli::compare::{run_compare, CompareArgs};
use hexsum_cli::file::{run_file, FileArgs};
use hexsum_cli::identify::{run_identify, IdentifyArgs};
use hexsum_cli::text::{run_text, TextArgs};

/// hexsum — digest computation and hash-type identification.
///
/// Computes MD5, SHA-1, SHA-256, and SHA-512 digests of text and files,
/// identifies which algorithm could have produced an unlabeled hex digest,
/// and compares digests for integrity checks.
#[derive(Parser, Debug)]
#[command(name = "hexsum", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the digest of a literal text argument.
    Text(TextArgs),

    /// Compute the digest of a file, streamed in fixed-size chunks.
    File(FileArgs),

    /// Identify which digest algorithm(s) could have produced a hex string.
    Identify(IdentifyArgs),

    /// Compare two digests after normalization (exit 1 on mismatch).
    Compare(CompareArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Text(args) => run_text(&args),
        Commands::File(args) => run_file(&args),
        Commands::Identify(args) => run_identify(&args),
        Commands::Compare(args) => run_compare(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
