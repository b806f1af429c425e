//! Deezer API integration (secondary catalog)
//!
//! Used only to backfill what the primary catalog lacks: tempo (BPM) and
//! preview audio. Public, unauthenticated and rate limited, so every lookup
//! is best-effort.
//!
//! API docs: https://developers.deezer.com/api

pub mod dto;
mod client;
mod lookup;

pub use client::DeezerClient;
pub use lookup::{DeezerApi, DeezerLookup};
