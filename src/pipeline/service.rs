//! Catalog service - the high-level API over both catalogs
//!
//! Composes the orchestrators with the configured concurrency caps:
//! 1. Resolve free-text queries against the primary catalog
//! 2. Backfill BPM and previews from the secondary catalog
//! 3. List and enrich playlist tracks

use crate::catalog::{
    CatalogError, DeezerLookup, EnrichableTrack, PlaylistInfo, PrimaryCatalog, ResolutionResult,
    ResolvedQuery, SecondaryCatalog, SpotifyClient,
};
use crate::config::{ConcurrencyConfig, Config};

use super::enrich::{enrich_missing, enrich_tracks};
use super::playlist::fetch_playlist_tracks;
use super::resolve::resolve_all;

/// Service for resolving and enriching tracks
pub struct CatalogService<P = SpotifyClient, S = DeezerLookup> {
    primary: P,
    secondary: S,
    concurrency: ConcurrencyConfig,
}

impl CatalogService {
    /// Build the production service from a config file and an access token
    pub fn from_config(config: &Config, access_token: &str) -> Result<Self, CatalogError> {
        let primary = SpotifyClient::new(access_token, &config.primary)?;
        let secondary = DeezerLookup::new(config.secondary.clone())?;
        Ok(Self::new(primary, secondary, config.concurrency.clone()))
    }
}

impl<P: PrimaryCatalog, S: SecondaryCatalog> CatalogService<P, S> {
    pub fn new(primary: P, secondary: S, concurrency: ConcurrencyConfig) -> Self {
        Self {
            primary,
            secondary,
            concurrency,
        }
    }

    /// Resolve a batch of queries, one result per query in input order.
    pub async fn resolve_all(
        &self,
        queries: &[String],
        limit: u32,
    ) -> Result<Vec<ResolutionResult>, CatalogError> {
        resolve_all(
            &self.primary,
            queries,
            limit,
            self.concurrency.resolve_workers,
        )
        .await
    }

    /// Fill missing BPM and preview URLs in place.
    pub async fn enrich_missing(&self, tracks: &mut [EnrichableTrack]) {
        enrich_missing(&self.secondary, tracks, self.concurrency.enrich_workers).await;
    }

    /// Resolve, then enrich every candidate of every result in one pass.
    pub async fn resolve_enriched(
        &self,
        queries: &[String],
        limit: u32,
    ) -> Result<Vec<ResolvedQuery>, CatalogError> {
        let mut resolved: Vec<ResolvedQuery> = self
            .resolve_all(queries, limit)
            .await?
            .into_iter()
            .map(ResolvedQuery::from)
            .collect();

        enrich_tracks(
            &self.secondary,
            resolved.iter_mut().flat_map(|r| r.matches.iter_mut()),
            self.concurrency.enrich_workers,
        )
        .await;

        Ok(resolved)
    }

    /// Playlist header
    pub async fn playlist(&self, playlist_id: &str) -> Result<PlaylistInfo, CatalogError> {
        self.primary.playlist(playlist_id).await
    }

    /// All tracks of a playlist, in order, with missing fields backfilled.
    pub async fn get_playlist_tracks_enriched(
        &self,
        playlist_id: &str,
    ) -> Result<Vec<EnrichableTrack>, CatalogError> {
        let tracks =
            fetch_playlist_tracks(&self.primary, playlist_id, self.concurrency.page_workers)
                .await?;

        let mut tracks: Vec<EnrichableTrack> =
            tracks.into_iter().map(EnrichableTrack::from).collect();
        self.enrich_missing(&mut tracks).await;
        Ok(tracks)
    }
}
