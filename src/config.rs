//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\songbridge\config.toml
//! - macOS: ~/Library/Application Support/songbridge/config.toml
//! - Linux: ~/.config/songbridge/config.toml
//!
//! Every field has a default, so a partial (or missing) file is fine.
//! Command-line flags and environment variables override what is loaded here.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API credentials
    pub credentials: Credentials,

    /// Primary catalog (Spotify) settings
    pub primary: PrimaryConfig,

    /// Secondary catalog (Deezer) settings
    pub secondary: SecondaryConfig,

    /// Worker caps for batch operations
    pub concurrency: ConcurrencyConfig,
}

/// API credentials
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// Spotify OAuth access token (obtained and refreshed outside this tool)
    pub spotify_access_token: Option<String>,
}

/// Primary catalog settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimaryConfig {
    /// Web API root
    pub base_url: String,

    /// ISO 3166-1 country code used to pick playable track versions
    pub market: Option<String>,

    /// Candidates returned per query
    pub search_limit: u32,

    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for PrimaryConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.spotify.com/v1".to_string(),
            market: None,
            search_limit: 10,
            timeout_ms: 10_000,
        }
    }
}

/// Secondary catalog settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecondaryConfig {
    /// API root
    pub base_url: String,

    /// User-Agent sent with every request
    pub user_agent: String,

    /// Timeout for BPM search calls
    pub search_timeout_ms: u64,

    /// Timeout for track detail calls
    pub detail_timeout_ms: u64,

    /// Timeout for preview search calls
    pub preview_timeout_ms: u64,

    /// Candidates checked by the combined artist+title search
    pub strict_candidates: u32,

    /// Candidates checked by the title-only search
    pub permissive_candidates: u32,
}

impl Default for SecondaryConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.deezer.com".to_string(),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            search_timeout_ms: 3_000,
            detail_timeout_ms: 2_500,
            preview_timeout_ms: 2_000,
            strict_candidates: 5,
            permissive_candidates: 10,
        }
    }
}

/// Concurrency caps. Policy values, tuned to upstream rate limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConcurrencyConfig {
    /// Concurrent primary-catalog searches per resolution batch
    pub resolve_workers: usize,

    /// Concurrent secondary-catalog lookups per enrichment batch
    pub enrich_workers: usize,

    /// Concurrent playlist page fetches
    pub page_workers: usize,
}

impl Default for ConcurrencyConfig {
    fn default() -> Self {
        Self {
            resolve_workers: 20,
            enrich_workers: 10,
            page_workers: 10,
        }
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("songbridge"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the default location
///
/// Returns default config if file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };
    load_from(&path)
}

/// Load configuration from an explicit path, falling back to defaults
pub fn load_from(path: &Path) -> Config {
    if !path.exists() {
        tracing::debug!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::debug!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Save configuration to the default location
///
/// Creates the config directory if it doesn't exist.
pub fn save(config: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;
    save_to(config, &path)?;
    Ok(path)
}

/// Save configuration to an explicit path
pub fn save_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir(dir.to_path_buf(), e))?;
    }

    // Serialize to pretty TOML
    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| ConfigError::Rename(temp_path, path.to_path_buf(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("[credentials]"));
        assert!(toml.contains("[primary]"));
        assert!(toml.contains("[secondary]"));
        assert!(toml.contains("[concurrency]"));
    }

    #[test]
    fn test_default_caps() {
        let config = Config::default();
        assert_eq!(config.concurrency.resolve_workers, 20);
        assert_eq!(config.concurrency.enrich_workers, 10);
        assert_eq!(config.secondary.strict_candidates, 5);
        assert_eq!(config.secondary.permissive_candidates, 10);
        assert_eq!(config.primary.search_limit, 10);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml = r#"
[credentials]
spotify_access_token = "my-token"

[concurrency]
enrich_workers = 4
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(
            config.credentials.spotify_access_token,
            Some("my-token".to_string())
        );
        assert_eq!(config.concurrency.enrich_workers, 4);

        // Other fields use defaults
        assert_eq!(config.concurrency.resolve_workers, 20);
        assert_eq!(config.secondary.base_url, "https://api.deezer.com");
        assert_eq!(config.secondary.detail_timeout_ms, 2_500);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.primary.market = Some("ES".to_string());
        config.concurrency.page_workers = 3;
        save_to(&config, &path).unwrap();

        let loaded = load_from(&path);
        assert_eq!(loaded.primary.market.as_deref(), Some("ES"));
        assert_eq!(loaded.concurrency.page_workers, 3);
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is [not toml").unwrap();

        let config = load_from(&path);
        assert_eq!(config.concurrency.resolve_workers, 20);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from(&dir.path().join("absent.toml"));
        assert!(config.credentials.spotify_access_token.is_none());
    }
}
