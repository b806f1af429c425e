//! Music catalogs - resolves free text to canonical tracks and backfills
//! tempo and preview audio.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types that represent our business logic
//! - **API DTOs** (`spotify/dto.rs`, `deezer/dto.rs`) - Exact API response shapes
//! - **Clients** - HTTP clients for the primary (Spotify) and secondary (Deezer) catalogs
//! - **Traits** (`traits.rs`) - Seams the pipeline is generic over, with mocks for tests
//! - **Normalize** - Rule-based title cleanup for cross-catalog matching
//!
//! # Usage
//!
//! ```ignore
//! use catalog::{DeezerLookup, SecondaryCatalog};
//!
//! let deezer = DeezerLookup::new(SecondaryConfig::default())?;
//! let bpm = deezer.find_bpm("Dua Lipa", "Levitating (feat. DaBaby)").await.bpm_or_zero();
//! ```

pub mod deezer;
pub mod domain;
pub mod normalize;
pub mod spotify;
pub mod traits;

pub use deezer::DeezerLookup;
pub use domain::{
    CatalogError, EnrichableTrack, Lookup, PlaylistInfo, PlaylistPage, ResolutionResult,
    ResolvedQuery, TrackCandidate, primary_artist,
};
pub use spotify::SpotifyClient;
pub use traits::{PrimaryCatalog, SecondaryCatalog};
