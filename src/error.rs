//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`
//! ([`CatalogError`], [`ConfigError`]); this enum gathers them for the command
//! layer, which in turn hands them to `anyhow` in `main`.
//!
//! # Example
//!
//! ```ignore
//! use songbridge::error::{Result, ResultExt};
//!
//! fn read_list(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path).with_context(format!("reading {}", path.display()))
//! }
//! ```

use crate::catalog::CatalogError;
use crate::config::ConfigError;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File or stdin I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Upstream catalog error
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No primary-catalog access token from flag, env or config file
    #[error(
        "No Spotify access token: pass --token, set SPOTIFY_ACCESS_TOKEN or add it to the config file"
    )]
    MissingToken,

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }

    /// True when the primary catalog rejected the access token.
    pub fn is_auth(&self) -> bool {
        match self {
            Error::Catalog(e) => e.is_auth(),
            Error::WithContext { source, .. } => source.is_auth(),
            _ => false,
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Io(e).context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, CatalogError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Catalog(e).context(ctx))
    }
}
