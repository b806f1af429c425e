//! Enrichment: backfill BPM and preview URLs from the secondary catalog.
//!
//! One repair job is dispatched per missing field. Each job holds a mutable
//! borrow of exactly the field it may fill, so jobs for the same track run
//! concurrently without locks. A job writes only when the lookup found
//! something; existing values are never touched because their jobs are never
//! created.

use futures::{StreamExt, stream};

use crate::catalog::{EnrichableTrack, SecondaryCatalog, TrackCandidate, primary_artist};

/// A single field to repair on a single track.
enum Repair<'a> {
    Bpm {
        artist: &'a str,
        title: &'a str,
        slot: &'a mut u32,
    },
    Preview {
        artist: &'a str,
        title: &'a str,
        slot: &'a mut Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    BpmFilled,
    PreviewFilled,
    Missed,
}

/// Fill missing BPM and preview URLs in place.
///
/// Works the same for freshly resolved candidates and for playlist tracks.
pub async fn enrich_missing<S>(catalog: &S, tracks: &mut [EnrichableTrack], workers: usize)
where
    S: SecondaryCatalog + ?Sized,
{
    enrich_tracks(catalog, tracks.iter_mut(), workers).await;
}

/// Like [`enrich_missing`], for tracks that don't live in one slice
/// (e.g. the candidates of every result in a resolution batch).
pub async fn enrich_tracks<'a, S, I>(catalog: &S, tracks: I, workers: usize)
where
    S: SecondaryCatalog + ?Sized,
    I: IntoIterator<Item = &'a mut EnrichableTrack>,
{
    let repairs = plan_repairs(tracks);
    if repairs.is_empty() {
        tracing::debug!("Nothing to enrich");
        return;
    }
    let dispatched = repairs.len();

    let outcomes: Vec<Outcome> = stream::iter(repairs)
        .map(|repair| run_repair(catalog, repair))
        .buffer_unordered(workers.max(1))
        .collect()
        .await;

    let bpm = outcomes.iter().filter(|o| **o == Outcome::BpmFilled).count();
    let previews = outcomes.iter().filter(|o| **o == Outcome::PreviewFilled).count();
    tracing::info!(
        "Enrichment filled {} BPM and {} preview values ({} lookups)",
        bpm,
        previews,
        dispatched
    );
}

fn plan_repairs<'a, I>(tracks: I) -> Vec<Repair<'a>>
where
    I: IntoIterator<Item = &'a mut EnrichableTrack>,
{
    let mut repairs = Vec::new();
    for track in tracks {
        let needs_bpm = track.needs_bpm();
        let needs_preview = track.needs_preview();
        let EnrichableTrack {
            track:
                TrackCandidate {
                    name,
                    artist,
                    preview_url,
                    ..
                },
            bpm,
        } = track;
        let credits: &'a String = artist;
        let artist: &'a str = primary_artist(credits);
        let title: &'a str = name;

        if needs_bpm {
            repairs.push(Repair::Bpm {
                artist,
                title,
                slot: bpm,
            });
        }
        if needs_preview {
            repairs.push(Repair::Preview {
                artist,
                title,
                slot: preview_url,
            });
        }
    }
    repairs
}

async fn run_repair<S>(catalog: &S, repair: Repair<'_>) -> Outcome
where
    S: SecondaryCatalog + ?Sized,
{
    match repair {
        Repair::Bpm {
            artist,
            title,
            slot,
        } => match catalog.find_bpm(artist, title).await.bpm_or_zero() {
            0 => Outcome::Missed,
            bpm => {
                *slot = bpm;
                Outcome::BpmFilled
            }
        },
        Repair::Preview {
            artist,
            title,
            slot,
        } => match catalog
            .find_preview_url(artist, title)
            .await
            .into_option()
            .filter(|url| !url.is_empty())
        {
            Some(url) => {
                *slot = Some(url);
                Outcome::PreviewFilled
            }
            None => Outcome::Missed,
        },
    }
}
