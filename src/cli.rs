//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;

use crate::commands;

/// Manifest Resolver - Resolve archive manifest attributes from layered build properties
#[derive(Parser, Debug)]
#[command(name = "manifest-resolver")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve the manifest attributes and print them
    Resolve(commands::resolve::ResolveArgs),

    /// Patch the manifests of built archives with the patched attribute set
    Patch(commands::patch::PatchArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        match self.command {
            Commands::Resolve(args) => commands::resolve::execute(args, &self.color),
            Commands::Patch(args) => commands::patch::execute(args, &self.color),
        }
    }
}

/// Log to stderr at the requested level. `RUST_LOG`, when set, refines it.
fn init_logging(level: &str) {
    let filter = level.parse().unwrap_or(LevelFilter::Warn);
    let mut builder = env_logger::Builder::new();
    builder.filter_level(filter).format_timestamp(None);
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    // a logger may already be installed when embedded
    let _ = builder.try_init();
}
