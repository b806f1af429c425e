//! Playlist "vibe" summary derived from known tempos.
//!
//! These are heuristics over average BPM, not measured audio features.

use serde::{Deserialize, Serialize};

use crate::catalog::EnrichableTrack;

/// Summary scores (0-100) plus the average BPM of a track list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vibe {
    pub energy: u32,
    pub danceability: u32,
    pub valence: u32,
    /// Average of the known BPMs, 0 when none are known
    pub bpm: u32,
}

impl Default for Vibe {
    fn default() -> Self {
        Self {
            energy: 50,
            danceability: 50,
            valence: 50,
            bpm: 0,
        }
    }
}

impl Vibe {
    /// Compute from tracks; tracks with unknown BPM are ignored.
    pub fn from_tracks(tracks: &[EnrichableTrack]) -> Self {
        let known: Vec<u64> = tracks
            .iter()
            .filter(|t| t.bpm > 0)
            .map(|t| u64::from(t.bpm))
            .collect();
        if known.is_empty() {
            return Self::default();
        }

        let avg = known.iter().sum::<u64>() / known.len() as u64;

        // Faster tracks read as more energetic
        let energy = ((avg as f64 * 0.6) as u64).clamp(40, 95);
        // Danceability peaks around 120 BPM
        let danceability = (100 - (120 - avg as i64).abs()).clamp(45, 90) as u64;
        let valence = (energy + danceability) / 2;

        Self {
            energy: energy as u32,
            danceability: danceability as u32,
            valence: valence as u32,
            bpm: avg.min(u64::from(u32::MAX)) as u32,
        }
    }
}
