//! Internal domain models for track resolution and enrichment.
//!
//! These types are OUR types - they don't change when the catalog APIs change.
//! Every upstream response gets converted into these types by the provider
//! modules before it reaches the pipeline.

use serde::{Deserialize, Serialize};

/// A candidate track returned by a primary-catalog search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackCandidate {
    /// Stable catalog identifier
    pub id: String,
    /// Playable URI (e.g. `spotify:track:...`)
    pub uri: String,
    /// Track display name
    pub name: String,
    /// Artist names joined with ", "
    pub artist: String,
    /// Artist identifiers, in credit order
    pub artist_ids: Vec<String>,
    /// Album title, when the upstream provides it
    pub album: Option<String>,
    /// Album art URL (first image offered by the catalog)
    pub image: Option<String>,
    /// 30-second preview clip
    pub preview_url: Option<String>,
    /// Web link to the track page
    pub external_url: String,
}

/// First name of a ", "-joined artist credit, the one the secondary catalog
/// files the track under.
pub fn primary_artist(credits: &str) -> &str {
    credits.split(", ").next().unwrap_or(credits).trim()
}

/// A track that can have its BPM and preview URL backfilled.
///
/// Enrichment mutates these in place; they are never recreated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichableTrack {
    #[serde(flatten)]
    pub track: TrackCandidate,
    /// Tempo in beats per minute, 0 = unknown
    pub bpm: u32,
}

impl EnrichableTrack {
    pub fn needs_bpm(&self) -> bool {
        self.bpm == 0
    }

    pub fn needs_preview(&self) -> bool {
        self.track.preview_url.is_none()
    }
}

impl From<TrackCandidate> for EnrichableTrack {
    fn from(track: TrackCandidate) -> Self {
        Self { track, bpm: 0 }
    }
}

/// Candidates found for one query of a batch.
///
/// `matches` are in upstream relevance order; the first one is the best guess.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    pub query: String,
    pub matches: Vec<TrackCandidate>,
}

impl ResolutionResult {
    /// A result with no candidates.
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            matches: Vec::new(),
        }
    }

    /// First-match-wins pick for this query.
    pub fn best(&self) -> Option<&TrackCandidate> {
        self.matches.first()
    }
}

/// A resolved query whose candidates have been through enrichment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedQuery {
    pub query: String,
    pub matches: Vec<EnrichableTrack>,
}

impl From<ResolutionResult> for ResolvedQuery {
    fn from(result: ResolutionResult) -> Self {
        Self {
            query: result.query,
            matches: result.matches.into_iter().map(EnrichableTrack::from).collect(),
        }
    }
}

/// Header information for a playlist
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistInfo {
    pub id: String,
    pub name: String,
    pub owner_id: Option<String>,
    pub owner_name: Option<String>,
    pub image: Option<String>,
    pub external_url: Option<String>,
    pub total_tracks: u32,
}

/// One page of a playlist's track listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistPage {
    /// Tracks on this page (unavailable/local items already dropped)
    pub tracks: Vec<TrackCandidate>,
    /// Total number of items in the playlist
    pub total: u32,
}

/// Outcome of a best-effort lookup against the secondary catalog.
///
/// Lookups never fail from the caller's point of view: every upstream error
/// collapses into `NotFound`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> Lookup<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound => None,
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Lookup::Found(v),
            None => Lookup::NotFound,
        }
    }
}

impl Lookup<u32> {
    /// BPM with the 0 = unknown convention.
    pub fn bpm_or_zero(self) -> u32 {
        self.into_option().unwrap_or(0)
    }
}

/// Errors that can occur while talking to a catalog
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("API request failed: {0}")]
    Api(String),

    #[error("Rate limited - try again later")]
    RateLimited,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Access token rejected: {0}")]
    Unauthorized(String),

    #[error("Access forbidden: {0}")]
    Forbidden(String),
}

impl CatalogError {
    /// 401/403-class failures. These must reach the session layer instead of
    /// being reported as "no match".
    pub fn is_auth(&self) -> bool {
        matches!(self, CatalogError::Unauthorized(_) | CatalogError::Forbidden(_))
    }

    /// Map a reqwest transport error, keeping timeouts distinguishable.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CatalogError::Timeout(err.to_string())
        } else {
            CatalogError::Network(err.to_string())
        }
    }
}
