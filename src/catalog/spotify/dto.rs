//! Spotify Web API Data Transfer Objects
//!
//! These types match what the Spotify Web API returns.
//! DO NOT use these types outside the spotify module - convert to domain types.
//!
//! API Reference: https://developer.spotify.com/documentation/web-api
//!
//! Only the fields we map are declared; serde ignores the rest.

use serde::{Deserialize, Serialize};

/// `GET /search?type=track` response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    pub tracks: Paging<Track>,
}

/// Generic paging object
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Paging<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub offset: u32,
    pub next: Option<String>,
}

/// Full track object
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Track {
    /// Null for local files
    pub id: Option<String>,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub artists: Vec<Artist>,
    pub album: Option<Album>,
    pub preview_url: Option<String>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    /// "track" or "episode"
    #[serde(rename = "type")]
    pub item_type: Option<String>,
}

/// Simplified artist object
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Artist {
    pub id: Option<String>,
    pub name: String,
}

/// Simplified album object
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Album {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

/// Image object (largest first)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Image {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

/// Entry of `GET /playlists/{id}/tracks`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaylistItem {
    /// Null when the track was removed from the catalog
    pub track: Option<Track>,
}

/// `GET /playlists/{id}` response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub owner: Option<Owner>,
    #[serde(default)]
    pub images: Option<Vec<Image>>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    pub tracks: Option<TracksRef>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Owner {
    pub id: String,
    pub display_name: Option<String>,
}

/// Track count reference embedded in a playlist object
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TracksRef {
    #[serde(default)]
    pub total: u32,
}

/// Error body: `{"error": {"status": 401, "message": "..."}}`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiErrorBody {
    pub status: u16,
    pub message: String,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_search_response() {
        let json = r#"{
            "tracks": {
                "href": "https://api.spotify.com/v1/search?query=levitating",
                "items": [{
                    "id": "463CkQjx2Zk1yXoBuierM9",
                    "uri": "spotify:track:463CkQjx2Zk1yXoBuierM9",
                    "name": "Levitating (feat. DaBaby)",
                    "type": "track",
                    "artists": [
                        {"id": "6M2wZ9GZgrQXHCFfjv46we", "name": "Dua Lipa"},
                        {"id": "4r63FhuTkUYltbVAg5TQnk", "name": "DaBaby"}
                    ],
                    "album": {
                        "name": "Future Nostalgia",
                        "images": [{"url": "https://i.scdn.co/image/640", "height": 640, "width": 640}]
                    },
                    "preview_url": null,
                    "external_urls": {"spotify": "https://open.spotify.com/track/463CkQjx2Zk1yXoBuierM9"},
                    "popularity": 80
                }],
                "limit": 10,
                "offset": 0,
                "total": 1,
                "next": null
            }
        }"#;

        let response: SearchResponse = serde_json::from_str(json).expect("Should parse search");
        assert_eq!(response.tracks.items.len(), 1);
        let track = &response.tracks.items[0];
        assert_eq!(track.artists.len(), 2);
        assert!(track.preview_url.is_none());
        assert_eq!(track.album.as_ref().unwrap().images.len(), 1);
    }

    #[test]
    fn test_parse_playlist_page_with_removed_track() {
        let json = r#"{
            "items": [
                {"added_at": "2024-01-01T00:00:00Z", "track": null},
                {"track": {"id": null, "uri": "spotify:local:a:b:c:180", "name": "Local", "artists": [], "album": {"name": "", "images": []}, "preview_url": null, "external_urls": {}}}
            ],
            "total": 2,
            "offset": 0,
            "next": null
        }"#;

        let page: Paging<PlaylistItem> = serde_json::from_str(json).expect("Should parse page");
        assert_eq!(page.total, 2);
        assert!(page.items[0].track.is_none());
        assert!(page.items[1].track.as_ref().unwrap().id.is_none());
    }

    #[test]
    fn test_parse_playlist() {
        let json = r#"{
            "id": "37i9dQZF1DXcBWIGoYBM5M",
            "name": "Today's Top Hits",
            "owner": {"id": "spotify", "display_name": "Spotify"},
            "images": [{"url": "https://i.scdn.co/image/cover", "height": null, "width": null}],
            "external_urls": {"spotify": "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M"},
            "tracks": {"href": "https://api.spotify.com/v1/playlists/37i9dQZF1DXcBWIGoYBM5M/tracks", "total": 50}
        }"#;

        let playlist: Playlist = serde_json::from_str(json).expect("Should parse playlist");
        assert_eq!(playlist.tracks.unwrap().total, 50);
        assert_eq!(playlist.owner.unwrap().id, "spotify");
    }

    #[test]
    fn test_parse_error_body() {
        let json = r#"{"error": {"status": 401, "message": "The access token expired"}}"#;
        let error: ApiError = serde_json::from_str(json).expect("Should parse error");
        assert_eq!(error.error.status, 401);
    }
}
