//! Config file commands.

use crate::config::{self, Config, ConfigError};
use crate::error::Error;

/// Print the config file location
pub fn cmd_config_path() -> anyhow::Result<()> {
    let path = config::config_path().ok_or(Error::Config(ConfigError::NoConfigDir))?;
    println!("{}", path.display());
    Ok(())
}

/// Print the effective configuration, with the token masked
pub fn cmd_config_show() -> anyhow::Result<()> {
    let config = redacted(config::load());
    println!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

/// Write a default config file
pub fn cmd_config_init(force: bool) -> anyhow::Result<()> {
    if let Some(path) = config::config_path()
        && path.exists()
        && !force
    {
        println!("Config already exists at {}", path.display());
        println!("Use --force to overwrite it with defaults.");
        return Ok(());
    }

    let path = config::save(&Config::default()).map_err(Error::from)?;
    println!("✓ Wrote default config to {}", path.display());
    Ok(())
}

fn redacted(mut config: Config) -> Config {
    if let Some(token) = config.credentials.spotify_access_token.as_mut() {
        let visible: String = token.chars().take(4).collect();
        *token = format!("{}…", visible);
    }
    config
}
