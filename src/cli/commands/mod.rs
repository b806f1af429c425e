//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `resolve`: Song list to enriched tracks
//! - `playlist`: Playlist listing with vibe summary
//! - `lookup`: Direct secondary-catalog lookups and title normalization
//! - `config`: Config file inspection and setup

mod config;
mod lookup;
mod playlist;
mod resolve;

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tokio::runtime::Runtime;

use crate::config::Config;
use crate::error::{Error, Result, ResultExt};

pub use config::{cmd_config_init, cmd_config_path, cmd_config_show};
pub use lookup::{cmd_lookup, cmd_normalize};
pub use playlist::cmd_playlist;
pub use resolve::cmd_resolve;

/// Songbridge CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Spotify access token (overrides the config file)
    #[arg(long, env = "SPOTIFY_ACCESS_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a pasted song list (one song per line) to catalog tracks
    Resolve {
        /// File with the song list (reads stdin when omitted)
        file: Option<PathBuf>,
        /// Candidates per song (default: primary.search_limit)
        #[arg(short, long)]
        limit: Option<u32>,
        /// Skip BPM/preview backfill
        #[arg(long)]
        no_enrich: bool,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List a playlist's tracks with BPM, previews and a vibe summary
    Playlist {
        /// Playlist ID, URI or open.spotify.com link
        id: String,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Look up BPM and preview URL on the secondary catalog
    Lookup {
        /// Artist name
        #[arg(long)]
        artist: String,
        /// Track title (raw, normalization is applied)
        #[arg(long)]
        title: String,
    },
    /// Show how a track title is normalized for matching
    Normalize {
        /// Raw track title
        title: String,
    },
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the config file location
    Path,
    /// Print the effective configuration
    Show,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Run the specified CLI command.
///
/// Returns `Ok(true)` if a command was run, `Ok(false)` if no command was specified.
pub fn run_command(cli: &Cli) -> anyhow::Result<bool> {
    let token = cli.token.as_deref();

    match &cli.command {
        Some(Commands::Resolve {
            file,
            limit,
            no_enrich,
            json,
        }) => {
            let rt = Runtime::new()?;
            cmd_resolve(&rt, token, file.as_deref(), *limit, !*no_enrich, *json)?;
            Ok(true)
        }
        Some(Commands::Playlist { id, json }) => {
            let rt = Runtime::new()?;
            cmd_playlist(&rt, token, id, *json)?;
            Ok(true)
        }
        Some(Commands::Lookup { artist, title }) => {
            let rt = Runtime::new()?;
            cmd_lookup(&rt, artist, title)?;
            Ok(true)
        }
        Some(Commands::Normalize { title }) => {
            cmd_normalize(title);
            Ok(true)
        }
        Some(Commands::Config { action }) => {
            match action {
                ConfigAction::Path => cmd_config_path()?,
                ConfigAction::Show => cmd_config_show()?,
                ConfigAction::Init { force } => cmd_config_init(*force)?,
            }
            Ok(true)
        }
        None => Ok(false),
    }
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// Pick the access token: flag/env first, then the config file.
pub(crate) fn access_token(flag: Option<&str>, config: &Config) -> Result<String> {
    usable_token(flag)
        .or_else(|| usable_token(config.credentials.spotify_access_token.as_deref()))
        .map(str::to_string)
        .ok_or(Error::MissingToken)
}

fn usable_token(token: Option<&str>) -> Option<&str> {
    token.map(str::trim).filter(|token| !token.is_empty())
}

/// Read the song list from a file, or stdin when no file is given
pub(crate) fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(format!("Failed to read {}", path.display())),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .with_context("Failed to read stdin")?;
            Ok(raw)
        }
    }
}

/// JSON envelope stamped with the generation time
#[derive(Serialize)]
pub(crate) struct Report<T: Serialize> {
    pub generated_at: String,
    #[serde(flatten)]
    pub body: T,
}

/// Print a value as pretty JSON
pub(crate) fn print_json<T: Serialize>(body: T) -> Result<()> {
    let report = Report {
        generated_at: chrono::Utc::now().to_rfc3339(),
        body,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Hint for the one failure the user can fix themselves
pub(crate) fn explain(err: Error) -> Error {
    if err.is_auth() {
        eprintln!("The access token was rejected. Refresh it and try again.");
    }
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Credentials;
    use std::io::Write;

    fn config_with_token(token: Option<&str>) -> Config {
        Config {
            credentials: Credentials {
                spotify_access_token: token.map(str::to_string),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_flag_token_wins() {
        let config = config_with_token(Some("from-file"));
        assert_eq!(access_token(Some("from-flag"), &config).unwrap(), "from-flag");
    }

    #[test]
    fn test_config_token_fallback() {
        let config = config_with_token(Some("  from-file \n"));
        assert_eq!(access_token(None, &config).unwrap(), "from-file");
    }

    #[test]
    fn test_blank_flag_falls_back_to_config() {
        let config = config_with_token(Some("from-file"));
        assert_eq!(access_token(Some(""), &config).unwrap(), "from-file");
        assert_eq!(access_token(Some("  \n"), &config).unwrap(), "from-file");
    }

    #[test]
    fn test_missing_token() {
        let config = config_with_token(None);
        assert!(matches!(access_token(None, &config), Err(Error::MissingToken)));
        assert!(matches!(access_token(Some("  "), &config), Err(Error::MissingToken)));
    }

    #[test]
    fn test_read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1. Creep Radiohead").unwrap();

        let raw = read_input(Some(file.path())).unwrap();
        assert_eq!(raw.trim(), "1. Creep Radiohead");
    }

    #[test]
    fn test_read_input_missing_file_has_context() {
        let err = read_input(Some(Path::new("/nonexistent/songs.txt"))).unwrap_err();
        assert!(err.to_string().contains("songs.txt"));
    }

    #[test]
    fn test_cli_parses_resolve() {
        let cli = Cli::try_parse_from(["songbridge", "resolve", "songs.txt", "--limit", "3", "--json"])
            .unwrap();
        match cli.command {
            Some(Commands::Resolve {
                file,
                limit,
                no_enrich,
                json,
            }) => {
                assert_eq!(file, Some(PathBuf::from("songs.txt")));
                assert_eq!(limit, Some(3));
                assert!(!no_enrich);
                assert!(json);
            }
            _ => panic!("expected resolve"),
        }
    }

    #[test]
    fn test_cli_requires_lookup_fields() {
        assert!(Cli::try_parse_from(["songbridge", "lookup", "--artist", "Muse"]).is_err());
    }
}
