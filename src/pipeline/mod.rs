//! Batch orchestration over the catalogs.
//!
//! Every orchestrator here is generic over the catalog traits and takes its
//! concurrency cap as an argument; [`CatalogService`] wires in the configured
//! caps and the production clients.

mod enrich;
mod playlist;
mod queries;
mod resolve;
mod service;
mod vibe;

pub use enrich::{enrich_missing, enrich_tracks};
pub use playlist::fetch_playlist_tracks;
pub use queries::parse_query_list;
pub use resolve::resolve_all;
pub use service::CatalogService;
pub use vibe::Vibe;
