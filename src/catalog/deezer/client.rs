//! Deezer HTTP client
//!
//! Thin wrapper over the two public endpoints we need. No authentication;
//! the API is rate limited per IP and has no documented SLA, so every call
//! carries its own short timeout.

use std::time::Duration;

use async_trait::async_trait;

use super::dto;
use super::lookup::DeezerApi;
use crate::catalog::domain::CatalogError;
use crate::config::SecondaryConfig;

/// Deezer API client
///
/// The underlying `reqwest::Client` is created once, eagerly, and shared across
/// all concurrent lookups so TLS sessions and connections are reused.
pub struct DeezerClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl DeezerClient {
    /// Create a new client
    pub fn new(settings: &SecondaryConfig) -> Result<Self, CatalogError> {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(settings.user_agent.as_str())
            .build()
            .map_err(CatalogError::from_transport)?;

        Ok(Self {
            http_client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, CatalogError> {
        let response = request.send().await.map_err(CatalogError::from_transport)?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(CatalogError::RateLimited);
        }
        if !status.is_success() {
            return Err(CatalogError::Api(format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))
    }
}

/// Turn an in-body Deezer error into our error type
fn body_error(error: dto::ApiError) -> CatalogError {
    if error.code == Some(dto::QUOTA_EXCEEDED) {
        CatalogError::RateLimited
    } else {
        CatalogError::Api(format!("{}: {}", error.kind, error.message))
    }
}

#[async_trait]
impl DeezerApi for DeezerClient {
    async fn search(
        &self,
        query: &str,
        limit: u32,
        timeout: Duration,
    ) -> Result<Vec<dto::SearchItem>, CatalogError> {
        let url = format!("{}/search", self.base_url);
        let limit = limit.to_string();
        let request = self
            .http_client
            .get(&url)
            .query(&[("q", query), ("limit", limit.as_str())])
            .timeout(timeout);

        tracing::debug!("Deezer search: {:?} (limit {})", query, limit);
        let response: dto::SearchResponse = self.get_json(request).await?;
        match response.error {
            Some(error) => Err(body_error(error)),
            None => Ok(response.data),
        }
    }

    async fn track(&self, id: u64, timeout: Duration) -> Result<dto::TrackDetail, CatalogError> {
        let url = format!("{}/track/{}", self.base_url, id);
        let request = self.http_client.get(&url).timeout(timeout);

        let detail: dto::TrackDetail = self.get_json(request).await?;
        match detail.error {
            Some(error) => Err(body_error(error)),
            None => Ok(detail),
        }
    }
}
