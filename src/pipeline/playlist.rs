//! Playlist track listing across pages.

use futures::{StreamExt, TryStreamExt, stream};

use crate::catalog::spotify::MAX_PAGE_SIZE;
use crate::catalog::{CatalogError, PrimaryCatalog, TrackCandidate};

/// Fetch every track of a playlist, in playlist order.
///
/// The first page tells us the total; the remaining pages are fetched
/// concurrently into pre-sized slots and concatenated in offset order.
/// Any page failure fails the whole listing rather than returning a
/// silently truncated playlist.
pub async fn fetch_playlist_tracks<P>(
    catalog: &P,
    playlist_id: &str,
    workers: usize,
) -> Result<Vec<TrackCandidate>, CatalogError>
where
    P: PrimaryCatalog + ?Sized,
{
    let first = catalog.playlist_items(playlist_id, MAX_PAGE_SIZE, 0).await?;
    let total = first.total;

    let offsets: Vec<u32> = (MAX_PAGE_SIZE..total)
        .step_by(MAX_PAGE_SIZE as usize)
        .collect();
    let mut pages: Vec<Vec<TrackCandidate>> = vec![Vec::new(); offsets.len()];

    if !offsets.is_empty() {
        tracing::debug!(
            "Playlist {} has {} items, fetching {} more pages",
            playlist_id,
            total,
            offsets.len()
        );

        stream::iter(pages.iter_mut().zip(offsets.iter().copied()))
            .map(|(slot, offset)| async move {
                let page = catalog
                    .playlist_items(playlist_id, MAX_PAGE_SIZE, offset)
                    .await?;
                *slot = page.tracks;
                Ok::<(), CatalogError>(())
            })
            .buffer_unordered(workers.max(1))
            .try_collect::<()>()
            .await?;
    }

    let mut tracks = first.tracks;
    tracks.extend(pages.into_iter().flatten());

    tracing::info!("Fetched {} tracks from playlist {}", tracks.len(), playlist_id);
    Ok(tracks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::traits::mocks::MockPrimaryCatalog;
    use crate::test_utils::candidate;
    use std::sync::atomic::Ordering;

    fn playlist_of(n: usize) -> Vec<TrackCandidate> {
        (0..n)
            .map(|i| candidate(&format!("t{i:03}"), &format!("Song {i}"), "Artist"))
            .collect()
    }

    #[tokio::test]
    async fn test_multi_page_order() {
        let mock = MockPrimaryCatalog::new().with_playlist(playlist_of(250));

        let tracks = fetch_playlist_tracks(&mock, "p", 10).await.unwrap();

        assert_eq!(tracks.len(), 250);
        assert_eq!(mock.page_calls.load(Ordering::SeqCst), 3);
        let expected: Vec<String> = (0..250).map(|i| format!("t{i:03}")).collect();
        let actual: Vec<String> = tracks.into_iter().map(|t| t.id).collect();
        assert_eq!(actual, expected);
    }

    #[tokio::test]
    async fn test_single_page() {
        let mock = MockPrimaryCatalog::new().with_playlist(playlist_of(100));

        let tracks = fetch_playlist_tracks(&mock, "p", 10).await.unwrap();

        assert_eq!(tracks.len(), 100);
        assert_eq!(mock.page_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_playlist() {
        let mock = MockPrimaryCatalog::new();
        let tracks = fetch_playlist_tracks(&mock, "p", 10).await.unwrap();
        assert!(tracks.is_empty());
    }

    #[tokio::test]
    async fn test_page_failure_propagates() {
        let mock = MockPrimaryCatalog::new()
            .with_playlist(playlist_of(250))
            .with_failing_page(100);

        let result = fetch_playlist_tracks(&mock, "p", 10).await;
        assert!(matches!(result, Err(CatalogError::Network(_))));
    }

    #[tokio::test]
    async fn test_page_workers_cap() {
        let mock = MockPrimaryCatalog::new().with_playlist(playlist_of(1000));

        let tracks = fetch_playlist_tracks(&mock, "p", 2).await.unwrap();

        assert_eq!(tracks.len(), 1000);
        assert!(mock.peak_in_flight.load(Ordering::SeqCst) <= 2);
    }
}
