//! Spotify Web API integration (primary catalog)
//!
//! Provides canonical track identity: free-text track search and paginated
//! playlist listings.
//!
//! API docs: https://developer.spotify.com/documentation/web-api

pub mod dto;
mod adapter;
mod client;

pub use client::{MAX_PAGE_SIZE, SpotifyClient};
