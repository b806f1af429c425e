//! Test utilities and fixtures for songbridge tests.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{candidate, enrichable};
//!
//! let track = enrichable("t1", "Levitating", "Dua Lipa");
//! assert_eq!(track.bpm, 0);
//! ```

use crate::catalog::{EnrichableTrack, TrackCandidate};

/// Creates a TrackCandidate with sensible defaults and no preview.
pub fn candidate(id: &str, name: &str, artist: &str) -> TrackCandidate {
    TrackCandidate {
        id: id.to_string(),
        uri: format!("spotify:track:{}", id),
        name: name.to_string(),
        artist: artist.to_string(),
        artist_ids: vec![format!("artist-{}", id)],
        album: None,
        image: None,
        preview_url: None,
        external_url: format!("https://open.spotify.com/track/{}", id),
    }
}

/// Creates an EnrichableTrack with unknown BPM and no preview.
pub fn enrichable(id: &str, name: &str, artist: &str) -> EnrichableTrack {
    EnrichableTrack::from(candidate(id, name, artist))
}

/// Creates a fully populated EnrichableTrack.
pub fn populated(id: &str, name: &str, artist: &str, bpm: u32) -> EnrichableTrack {
    let mut track = enrichable(id, name, artist);
    track.bpm = bpm;
    track.track.preview_url = Some(format!("https://cdn.example.com/{}.mp3", id));
    track
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures() {
        let track = enrichable("t1", "Song", "Artist");
        assert!(track.needs_bpm());
        assert!(track.needs_preview());

        let full = populated("t2", "Song", "Artist", 120);
        assert!(!full.needs_bpm());
        assert!(!full.needs_preview());
    }
}
