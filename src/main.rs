//! Songbridge - resolve free-text song lists to catalog tracks.
//!
//! Songs are matched against the Spotify catalog, then BPM and preview
//! clips the primary catalog lacks are backfilled from Deezer.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
#[cfg(test)]
pub mod test_utils;

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    let directive = if args.verbose {
        "songbridge=debug"
    } else {
        "songbridge=info"
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .init();

    if !cli::run_command(&args)? {
        // No command specified
        cli::Cli::command().print_help()?;
    }
    Ok(())
}
