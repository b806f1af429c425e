//! Command-line interface for songbridge.
//!
//! This module provides CLI commands for resolving song lists, listing
//! playlists and poking at the individual catalog lookups.

mod commands;

pub use commands::{Cli, Commands, run_command};
