//! Spotify Web API HTTP client
//!
//! Handles communication with the primary catalog.
//! See: https://developer.spotify.com/documentation/web-api
//!
//! The client is handed a ready-to-use OAuth access token; acquiring and
//! refreshing that token is the session layer's job. A 401/403 from Spotify is
//! therefore reported as [`CatalogError::Unauthorized`] / [`CatalogError::Forbidden`]
//! so the caller can re-authenticate, never folded into "no match".

use std::time::Duration;

use serde::de::DeserializeOwned;

use super::{adapter, dto};
use crate::catalog::domain::{CatalogError, PlaylistInfo, PlaylistPage, TrackCandidate};
use crate::config::PrimaryConfig;

/// Spotify caps search pages at 50 and playlist pages at 100.
const MAX_SEARCH_LIMIT: u32 = 50;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Spotify Web API client
///
/// One `reqwest::Client` (connection pool) is built at construction and shared
/// by every request, including concurrent ones.
pub struct SpotifyClient {
    http_client: reqwest::Client,
    base_url: String,
    access_token: String,
    market: Option<String>,
}

impl SpotifyClient {
    /// Create a new client for the given access token
    pub fn new(access_token: impl Into<String>, settings: &PrimaryConfig) -> Result<Self, CatalogError> {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .timeout(Duration::from_millis(settings.timeout_ms))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(CatalogError::from_transport)?;

        Ok(Self {
            http_client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            access_token: access_token.into(),
            market: settings.market.clone(),
        })
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(access_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
            access_token: access_token.into(),
            market: None,
        }
    }

    /// Search tracks matching a free-text query.
    ///
    /// Best-effort: transport, rate-limit and parse failures are logged and
    /// yield an empty list. Only auth failures come back as `Err`.
    pub async fn search_track(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<TrackCandidate>, CatalogError> {
        match self.send_search_request(query, limit).await {
            Ok(response) => Ok(adapter::to_candidates(response)),
            Err(e) if e.is_auth() => Err(e),
            Err(e) => {
                tracing::warn!("Spotify search failed for {:?}: {}", query, e);
                Ok(Vec::new())
            }
        }
    }

    /// Fetch playlist header information
    pub async fn playlist(&self, playlist_id: &str) -> Result<PlaylistInfo, CatalogError> {
        let url = format!(
            "{}/playlists/{}",
            self.base_url,
            urlencoding::encode(playlist_id)
        );
        let request = self
            .http_client
            .get(&url)
            .query(&[("fields", "id,name,owner(id,display_name),images,external_urls,tracks(total)")]);

        let playlist: dto::Playlist = self.send(request).await?;
        Ok(adapter::to_playlist_info(playlist))
    }

    /// Fetch one page of a playlist's tracks
    pub async fn playlist_items(
        &self,
        playlist_id: &str,
        limit: u32,
        offset: u32,
    ) -> Result<PlaylistPage, CatalogError> {
        let url = format!(
            "{}/playlists/{}/tracks",
            self.base_url,
            urlencoding::encode(playlist_id)
        );
        let limit = limit.clamp(1, MAX_PAGE_SIZE).to_string();
        let offset = offset.to_string();

        let mut request = self
            .http_client
            .get(&url)
            .query(&[("limit", limit.as_str()), ("offset", offset.as_str())]);
        if let Some(ref market) = self.market {
            request = request.query(&[("market", market.as_str())]);
        }

        tracing::debug!("Fetching playlist {} page at offset {}", playlist_id, offset);
        let page: dto::Paging<dto::PlaylistItem> = self.send(request).await?;
        Ok(adapter::to_playlist_page(page))
    }

    async fn send_search_request(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<dto::SearchResponse, CatalogError> {
        let url = format!("{}/search", self.base_url);
        let limit = limit.clamp(1, MAX_SEARCH_LIMIT).to_string();

        let mut request = self
            .http_client
            .get(&url)
            .query(&[("q", query), ("type", "track"), ("limit", limit.as_str())]);
        if let Some(ref market) = self.market {
            request = request.query(&[("market", market.as_str())]);
        }

        tracing::debug!("Spotify search: {:?}", query);
        self.send(request).await
    }

    /// Attach the bearer token, send, map the status and parse the body
    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, CatalogError> {
        let response = request
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(CatalogError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<dto::ApiError>().await {
                Ok(body) => body.error.message,
                Err(_) => status.canonical_reason().unwrap_or("Unknown").to_string(),
            };
            return Err(status_error(status, message));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))
    }
}

/// Map a non-success HTTP status to our error taxonomy
fn status_error(status: reqwest::StatusCode, message: String) -> CatalogError {
    match status {
        reqwest::StatusCode::UNAUTHORIZED => CatalogError::Unauthorized(message),
        reqwest::StatusCode::FORBIDDEN => CatalogError::Forbidden(message),
        reqwest::StatusCode::NOT_FOUND => CatalogError::NotFound(message),
        reqwest::StatusCode::TOO_MANY_REQUESTS => CatalogError::RateLimited,
        _ => CatalogError::Api(format!("HTTP {}: {}", status.as_u16(), message)),
    }
}
