//! Trait definitions for the catalog clients.
//!
//! The pipeline is generic over these traits so the orchestrators can be
//! tested against in-memory mocks. Production code uses [`SpotifyClient`] and
//! [`DeezerLookup`].
//!
//! # Example
//!
//! ```ignore
//! use songbridge::catalog::traits::PrimaryCatalog;
//!
//! async fn first_hit<P: PrimaryCatalog>(catalog: &P, query: &str) -> Option<TrackCandidate> {
//!     catalog.search_track(query, 1).await.ok()?.into_iter().next()
//! }
//! ```

use async_trait::async_trait;

use super::deezer::{DeezerApi, DeezerLookup};
use super::domain::{CatalogError, Lookup, PlaylistInfo, PlaylistPage, TrackCandidate};
use super::spotify::SpotifyClient;

/// Primary catalog: canonical track identity.
#[async_trait]
pub trait PrimaryCatalog: Send + Sync {
    /// Search tracks for a free-text query, best match first.
    ///
    /// Implementations return an empty list for ordinary upstream failures;
    /// `Err` is reserved for failures the caller must act on (auth).
    async fn search_track(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<TrackCandidate>, CatalogError>;

    /// Playlist header information.
    async fn playlist(&self, playlist_id: &str) -> Result<PlaylistInfo, CatalogError>;

    /// One page of a playlist's tracks.
    async fn playlist_items(
        &self,
        playlist_id: &str,
        limit: u32,
        offset: u32,
    ) -> Result<PlaylistPage, CatalogError>;
}

/// Secondary catalog: best-effort BPM and preview backfill.
#[async_trait]
pub trait SecondaryCatalog: Send + Sync {
    async fn find_bpm(&self, artist: &str, title: &str) -> Lookup<u32>;

    async fn find_preview_url(&self, artist: &str, title: &str) -> Lookup<String>;
}

// Implement traits for real clients

#[async_trait]
impl PrimaryCatalog for SpotifyClient {
    async fn search_track(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<TrackCandidate>, CatalogError> {
        self.search_track(query, limit).await
    }

    async fn playlist(&self, playlist_id: &str) -> Result<PlaylistInfo, CatalogError> {
        self.playlist(playlist_id).await
    }

    async fn playlist_items(
        &self,
        playlist_id: &str,
        limit: u32,
        offset: u32,
    ) -> Result<PlaylistPage, CatalogError> {
        self.playlist_items(playlist_id, limit, offset).await
    }
}

#[async_trait]
impl<A: DeezerApi> SecondaryCatalog for DeezerLookup<A> {
    async fn find_bpm(&self, artist: &str, title: &str) -> Lookup<u32> {
        self.find_bpm(artist, title).await
    }

    async fn find_preview_url(&self, artist: &str, title: &str) -> Lookup<String> {
        self.find_preview_url(artist, title).await
    }
}
