//! # repoherd CLI
//!
//! This is the binary entry point for the `repoherd` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Running the batch clone and translating the one fatal error (input
//!   file cannot be opened) into user-friendly output.
//!
//! The core orchestration logic lives in the `lib.rs` library crate,
//! ensuring that the binary is a thin wrapper around the reusable library
//! functionality.

mod cli;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
