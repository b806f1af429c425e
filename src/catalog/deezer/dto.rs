//! Deezer API Data Transfer Objects
//!
//! These types match what the public Deezer API returns.
//! DO NOT use these types outside the deezer module.
//!
//! API Reference: https://developers.deezer.com/api
//!
//! Deezer reports most failures (quota exceeded, unknown id) as HTTP 200 with an
//! `error` object instead of `data`, so every response type carries `error`.

use serde::{Deserialize, Serialize};

/// `GET /search?q=...&limit=n` response
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Vec<SearchItem>,
    pub total: Option<u32>,
    pub error: Option<ApiError>,
}

/// Track entry in search results
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchItem {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    pub artist: ArtistRef,
    /// 30-second MP3 clip; empty string when unavailable
    pub preview: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ArtistRef {
    #[serde(default)]
    pub name: String,
}

/// `GET /track/{id}` response
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TrackDetail {
    pub id: Option<u64>,
    pub title: Option<String>,
    /// Tempo estimate; 0 when Deezer has none
    pub bpm: Option<f64>,
    pub preview: Option<String>,
    pub error: Option<ApiError>,
}

impl TrackDetail {
    /// BPM truncated to an integer, if strictly positive
    pub fn positive_bpm(&self) -> Option<u32> {
        let bpm = self.bpm.filter(|b| b.is_finite())?;
        let whole = bpm.trunc();
        (whole >= 1.0).then(|| whole.min(u32::MAX as f64) as u32)
    }
}

/// Error object: `{"error": {"type": "Exception", "message": "Quota limit exceeded", "code": 4}}`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub message: String,
    pub code: Option<u32>,
}

/// Deezer's "Quota limit exceeded" error code
pub const QUOTA_EXCEEDED: u32 = 4;

// ============================================================================
// CONTRACT TESTS
// ============================================================================
