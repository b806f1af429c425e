//! Resolution: free-text queries to ranked primary-catalog candidates.

use futures::{StreamExt, stream};

use crate::catalog::{CatalogError, PrimaryCatalog, ResolutionResult};

/// Resolve every query of a batch concurrently.
///
/// The output has one entry per input, in input order. A result slot is
/// allocated per query up front and each search future owns exactly one slot,
/// so completion order is irrelevant. Blank queries resolve locally to an empty
/// result without touching the network.
///
/// A failed search leaves its slot empty and never affects siblings. The only
/// exception is an auth failure: the batch still runs to completion, then the
/// first auth error is returned so the session layer can re-authenticate.
pub async fn resolve_all<P>(
    catalog: &P,
    queries: &[String],
    limit: u32,
    workers: usize,
) -> Result<Vec<ResolutionResult>, CatalogError>
where
    P: PrimaryCatalog + ?Sized,
{
    let mut results: Vec<ResolutionResult> = queries
        .iter()
        .map(|query| ResolutionResult::empty(query.as_str()))
        .collect();

    let auth_errors: Vec<CatalogError> = stream::iter(
        results
            .iter_mut()
            .filter(|slot| !slot.query.trim().is_empty()),
    )
    .map(|slot| async move {
        match catalog.search_track(slot.query.trim(), limit).await {
            Ok(matches) => {
                slot.matches = matches;
                None
            }
            Err(e) if e.is_auth() => Some(e),
            Err(e) => {
                tracing::warn!("Search for {:?} failed: {}", slot.query, e);
                None
            }
        }
    })
    .buffer_unordered(workers.max(1))
    .filter_map(|outcome| async move { outcome })
    .collect()
    .await;

    if let Some(error) = auth_errors.into_iter().next() {
        return Err(error);
    }

    let resolved = results.iter().filter(|r| r.best().is_some()).count();
    tracing::info!("Resolved {}/{} queries", resolved, results.len());
    Ok(results)
}
