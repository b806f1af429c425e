//! Playlist listing command.

use serde::Serialize;
use tokio::runtime::Runtime;

use crate::catalog::{CatalogError, EnrichableTrack, PlaylistInfo};
use crate::config;
use crate::error::ResultExt;
use crate::pipeline::{CatalogService, Vibe};

use super::{access_token, explain, print_json};

#[derive(Serialize)]
struct PlaylistReport<'a> {
    playlist: &'a PlaylistInfo,
    vibe: Vibe,
    tracks: &'a [EnrichableTrack],
}

/// List a playlist with backfilled BPM/previews and a vibe summary
pub fn cmd_playlist(
    rt: &Runtime,
    token: Option<&str>,
    input: &str,
    json: bool,
) -> anyhow::Result<()> {
    let config = config::load();
    let token = access_token(token, &config)?;
    let service = CatalogService::from_config(&config, &token)?;
    let playlist_id = playlist_id(input);

    let (info, tracks) = rt
        .block_on(async {
            let info = service.playlist(playlist_id).await?;
            let tracks = service.get_playlist_tracks_enriched(playlist_id).await?;
            Ok::<_, CatalogError>((info, tracks))
        })
        .with_context(format!("Failed to load playlist {}", playlist_id))
        .map_err(explain)?;

    let vibe = Vibe::from_tracks(&tracks);

    if json {
        print_json(PlaylistReport {
            playlist: &info,
            vibe,
            tracks: &tracks,
        })?;
        return Ok(());
    }

    println!("{}", info.name);
    if let Some(owner) = info.owner_name.as_deref().or(info.owner_id.as_deref()) {
        println!("by {}", owner);
    }
    println!("{}", "=".repeat(info.name.chars().count().max(8)));
    for (i, track) in tracks.iter().enumerate() {
        let bpm = match track.bpm {
            0 => "   ?".to_string(),
            bpm => format!("{:>4}", bpm),
        };
        let preview = if track.track.preview_url.is_some() { "▶" } else { " " };
        println!(
            "{:>4}. {} BPM {} {} - {}",
            i + 1,
            bpm,
            preview,
            track.track.artist,
            track.track.name
        );
    }
    println!();
    println!("Tracks:       {}", tracks.len());
    if vibe.bpm > 0 {
        println!("Average BPM:  {}", vibe.bpm);
    }
    println!("Energy:       {}", vibe.energy);
    println!("Danceability: {}", vibe.danceability);
    println!("Valence:      {}", vibe.valence);
    Ok(())
}

/// Accept a bare ID, a `spotify:playlist:` URI or an open.spotify.com link
fn playlist_id(input: &str) -> &str {
    let input = input.trim();
    if let Some(id) = input.strip_prefix("spotify:playlist:") {
        return id;
    }
    match input.split_once("/playlist/") {
        Some((_, rest)) => rest.split(['?', '/', '#']).next().unwrap_or(rest),
        None => input,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playlist_id_forms() {
        assert_eq!(playlist_id("37i9dQZF1DXcBWIGoYBM5M"), "37i9dQZF1DXcBWIGoYBM5M");
        assert_eq!(
            playlist_id("spotify:playlist:37i9dQZF1DXcBWIGoYBM5M"),
            "37i9dQZF1DXcBWIGoYBM5M"
        );
        assert_eq!(
            playlist_id("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=abc123"),
            "37i9dQZF1DXcBWIGoYBM5M"
        );
        assert_eq!(playlist_id("  abc  "), "abc");
    }
}
