//! # Manifest Resolver CLI
//!
//! Binary entry point for the `manifest-resolver` command-line tool. It
//! parses arguments with `clap` and dispatches to the command modules; all
//! resolution logic lives in the library crate.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
