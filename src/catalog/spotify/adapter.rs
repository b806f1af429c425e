//! Adapter layer: Convert Spotify DTOs to domain models
//!
//! This is the ONLY place where Spotify DTO types are converted to domain types.

use super::dto;
use crate::catalog::domain::{PlaylistInfo, PlaylistPage, TrackCandidate};

/// Convert a search response into ranked candidates (upstream order kept)
pub fn to_candidates(response: dto::SearchResponse) -> Vec<TrackCandidate> {
    response
        .tracks
        .items
        .into_iter()
        .filter_map(to_candidate)
        .collect()
}

/// Convert one page of playlist items, dropping removed tracks, local files
/// and podcast episodes
pub fn to_playlist_page(page: dto::Paging<dto::PlaylistItem>) -> PlaylistPage {
    let tracks = page
        .items
        .into_iter()
        .filter_map(|item| item.track)
        .filter(|track| track.item_type.as_deref().is_none_or(|t| t == "track"))
        .filter_map(to_candidate)
        .collect();

    PlaylistPage {
        tracks,
        total: page.total,
    }
}

pub fn to_playlist_info(playlist: dto::Playlist) -> PlaylistInfo {
    let image = playlist
        .images
        .as_deref()
        .and_then(first_image_url);

    PlaylistInfo {
        id: playlist.id,
        name: playlist.name,
        owner_id: playlist.owner.as_ref().map(|o| o.id.clone()),
        owner_name: playlist.owner.and_then(|o| o.display_name),
        image,
        external_url: playlist.external_urls.spotify,
        total_tracks: playlist.tracks.map(|t| t.total).unwrap_or(0),
    }
}

/// Map a track object; tracks without a catalog id (local files) are skipped
fn to_candidate(track: dto::Track) -> Option<TrackCandidate> {
    let id = track.id?;

    let artist = track
        .artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let artist_ids = track.artists.into_iter().filter_map(|a| a.id).collect();

    let (album, image) = match track.album {
        Some(album) => {
            let image = first_image_url(&album.images);
            let name = (!album.name.is_empty()).then_some(album.name);
            (name, image)
        }
        None => (None, None),
    };

    let external_url = track
        .external_urls
        .spotify
        .unwrap_or_else(|| format!("https://open.spotify.com/track/{}", id));

    Some(TrackCandidate {
        id,
        uri: track.uri,
        name: track.name,
        artist,
        artist_ids,
        album,
        image,
        preview_url: track.preview_url.filter(|url| !url.is_empty()),
        external_url,
    })
}

fn first_image_url(images: &[dto::Image]) -> Option<String> {
    images.first().map(|img| img.url.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: Option<&str>, name: &str) -> dto::Track {
        dto::Track {
            id: id.map(str::to_string),
            uri: format!("spotify:track:{}", id.unwrap_or("local")),
            name: name.to_string(),
            artists: vec![
                dto::Artist {
                    id: Some("a1".to_string()),
                    name: "Dua Lipa".to_string(),
                },
                dto::Artist {
                    id: Some("a2".to_string()),
                    name: "DaBaby".to_string(),
                },
            ],
            album: Some(dto::Album {
                name: "Future Nostalgia".to_string(),
                images: vec![
                    dto::Image {
                        url: "https://img/640".to_string(),
                        height: Some(640),
                        width: Some(640),
                    },
                    dto::Image {
                        url: "https://img/64".to_string(),
                        height: Some(64),
                        width: Some(64),
                    },
                ],
            }),
            preview_url: None,
            external_urls: dto::ExternalUrls {
                spotify: Some(format!("https://open.spotify.com/track/{}", id.unwrap_or(""))),
            },
            item_type: Some("track".to_string()),
        }
    }

    #[test]
    fn test_candidate_field_mapping() {
        let response = dto::SearchResponse {
            tracks: dto::Paging {
                items: vec![track(Some("t1"), "Levitating")],
                total: 1,
                offset: 0,
                next: None,
            },
        };

        let candidates = to_candidates(response);
        assert_eq!(candidates.len(), 1);
        let c = &candidates[0];
        assert_eq!(c.id, "t1");
        assert_eq!(c.artist, "Dua Lipa, DaBaby");
        assert_eq!(c.artist_ids, vec!["a1", "a2"]);
        assert_eq!(c.image.as_deref(), Some("https://img/640"));
        assert_eq!(c.album.as_deref(), Some("Future Nostalgia"));
        assert!(c.preview_url.is_none());
        assert_eq!(c.external_url, "https://open.spotify.com/track/t1");
    }

    #[test]
    fn test_missing_album_art_is_none() {
        let mut t = track(Some("t1"), "Song");
        t.album = Some(dto::Album {
            name: "Album".to_string(),
            images: vec![],
        });
        let candidate = to_candidate(t).unwrap();
        assert!(candidate.image.is_none());
    }

    #[test]
    fn test_search_order_is_preserved() {
        let response = dto::SearchResponse {
            tracks: dto::Paging {
                items: vec![track(Some("best"), "A"), track(Some("second"), "B")],
                total: 2,
                offset: 0,
                next: None,
            },
        };
        let ids: Vec<_> = to_candidates(response).into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["best", "second"]);
    }

    #[test]
    fn test_playlist_page_skips_unavailable() {
        let mut episode = track(Some("ep"), "Podcast");
        episode.item_type = Some("episode".to_string());

        let page = dto::Paging {
            items: vec![
                dto::PlaylistItem {
                    track: Some(track(Some("t1"), "One")),
                },
                dto::PlaylistItem { track: None },
                dto::PlaylistItem {
                    track: Some(track(None, "Local file")),
                },
                dto::PlaylistItem {
                    track: Some(episode),
                },
                dto::PlaylistItem {
                    track: Some(track(Some("t2"), "Two")),
                },
            ],
            total: 5,
            offset: 0,
            next: None,
        };

        let page = to_playlist_page(page);
        assert_eq!(page.total, 5);
        let ids: Vec<_> = page.tracks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t2"]);
    }

    #[test]
    fn test_playlist_info_mapping() {
        let playlist = dto::Playlist {
            id: "p1".to_string(),
            name: "Road Trip".to_string(),
            owner: Some(dto::Owner {
                id: "user1".to_string(),
                display_name: Some("Sam".to_string()),
            }),
            images: None,
            external_urls: dto::ExternalUrls::default(),
            tracks: Some(dto::TracksRef { total: 250 }),
        };

        let info = to_playlist_info(playlist);
        assert_eq!(info.owner_id.as_deref(), Some("user1"));
        assert_eq!(info.owner_name.as_deref(), Some("Sam"));
        assert!(info.image.is_none());
        assert_eq!(info.total_tracks, 250);
    }
}
