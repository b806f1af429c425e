//! BPM and preview lookups against Deezer.
//!
//! Both lookups run an escalating-leniency ladder:
//!
//! - **BPM**: a combined `artist + title` search (few candidates, every
//!   candidate trusted), then a title-only search (more candidates, each one
//!   accepted only if its artist overlaps the query artist).
//! - **Preview**: a qualified `artist:"..." track:"..."` search, then an
//!   unqualified `artist title` search.
//!
//! Titles are normalized first (see [`crate::catalog::normalize`]). Any upstream
//! failure ends the ladder and the lookup reports [`Lookup::NotFound`].

use std::time::Duration;

use async_trait::async_trait;

use super::client::DeezerClient;
use super::dto;
use crate::catalog::domain::{CatalogError, Lookup};
use crate::catalog::normalize::search_title;
use crate::config::SecondaryConfig;

/// Raw Deezer endpoints the lookup ladder is built on.
#[async_trait]
pub trait DeezerApi: Send + Sync {
    /// `GET /search`
    async fn search(
        &self,
        query: &str,
        limit: u32,
        timeout: Duration,
    ) -> Result<Vec<dto::SearchItem>, CatalogError>;

    /// `GET /track/{id}`
    async fn track(&self, id: u64, timeout: Duration) -> Result<dto::TrackDetail, CatalogError>;
}

/// Secondary-catalog lookups over any [`DeezerApi`] implementation
pub struct DeezerLookup<A = DeezerClient> {
    api: A,
    settings: SecondaryConfig,
}

impl DeezerLookup<DeezerClient> {
    /// Lookups backed by the real HTTP client
    pub fn new(settings: SecondaryConfig) -> Result<Self, CatalogError> {
        let api = DeezerClient::new(&settings)?;
        Ok(Self { api, settings })
    }
}

impl<A: DeezerApi> DeezerLookup<A> {
    pub fn with_api(api: A, settings: SecondaryConfig) -> Self {
        Self { api, settings }
    }

    /// Find a tempo for `artist` / `title`. Never fails.
    pub async fn find_bpm(&self, artist: &str, title: &str) -> Lookup<u32> {
        match self.try_find_bpm(artist, title).await {
            Ok(bpm) => bpm.into(),
            Err(e) => {
                tracing::debug!("Deezer BPM lookup for {} - {} failed: {}", artist, title, e);
                Lookup::NotFound
            }
        }
    }

    /// Find a preview clip URL for `artist` / `title`. Never fails.
    pub async fn find_preview_url(&self, artist: &str, title: &str) -> Lookup<String> {
        match self.try_find_preview(artist, title).await {
            Ok(url) => url.into(),
            Err(e) => {
                tracing::debug!("Deezer preview lookup for {} - {} failed: {}", artist, title, e);
                Lookup::NotFound
            }
        }
    }

    async fn try_find_bpm(&self, artist: &str, title: &str) -> Result<Option<u32>, CatalogError> {
        let title = search_title(title);
        let search_timeout = Duration::from_millis(self.settings.search_timeout_ms);

        // Pass 1: combined search, trust every candidate
        let combined = format!("{} {}", artist, title);
        let candidates = self
            .api
            .search(&combined, self.settings.strict_candidates, search_timeout)
            .await?;
        for item in &candidates {
            if let Some(bpm) = self.detail_bpm(item.id).await? {
                return Ok(Some(bpm));
            }
        }

        // Pass 2: title only, wider net, guarded by artist overlap
        let candidates = self
            .api
            .search(&title, self.settings.permissive_candidates, search_timeout)
            .await?;
        for item in candidates.iter().filter(|item| artists_overlap(artist, &item.artist.name)) {
            if let Some(bpm) = self.detail_bpm(item.id).await? {
                return Ok(Some(bpm));
            }
        }

        Ok(None)
    }

    /// BPM of one candidate. A per-track error answer (e.g. "no data") only
    /// rules out this candidate; transport failures and quota end the ladder.
    async fn detail_bpm(&self, id: u64) -> Result<Option<u32>, CatalogError> {
        let timeout = Duration::from_millis(self.settings.detail_timeout_ms);
        match self.api.track(id, timeout).await {
            Ok(detail) => Ok(detail.positive_bpm()),
            Err(CatalogError::Api(message) | CatalogError::NotFound(message)) => {
                tracing::debug!("Deezer track {} has no usable detail: {}", id, message);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn try_find_preview(&self, artist: &str, title: &str) -> Result<Option<String>, CatalogError> {
        let title = search_title(title);
        let timeout = Duration::from_millis(self.settings.preview_timeout_ms);

        let qualified = format!("artist:\"{}\" track:\"{}\"", artist, title);
        let mut results = self.api.search(&qualified, 1, timeout).await?;

        if results.is_empty() {
            let open = format!("{} {}", artist, title);
            results = self.api.search(&open, 1, timeout).await?;
        }

        Ok(results
            .into_iter()
            .next()
            .and_then(|item| item.preview)
            .filter(|url| !url.is_empty()))
    }
}

/// Case-insensitive substring match in either direction.
///
/// Deliberately loose: "Dua Lipa" accepts "Dua Lipa & DaBaby", and a short
/// stage name can accept an unrelated act that happens to contain it.
pub(crate) fn artists_overlap(query_artist: &str, candidate_artist: &str) -> bool {
    let query = query_artist.to_lowercase();
    let candidate = candidate_artist.to_lowercase();
    candidate.contains(&query) || query.contains(&candidate)
}
