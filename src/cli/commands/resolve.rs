//! Song list resolution command.

use serde::Serialize;
use std::path::Path;
use tokio::runtime::Runtime;

use crate::catalog::{EnrichableTrack, ResolvedQuery};
use crate::config;
use crate::error::ResultExt;
use crate::pipeline::{CatalogService, parse_query_list};

use super::{access_token, explain, print_json, read_input};

#[derive(Serialize)]
struct ResolveReport<'a> {
    results: &'a [ResolvedQuery],
}

/// Resolve a pasted song list and print the best match per line
pub fn cmd_resolve(
    rt: &Runtime,
    token: Option<&str>,
    file: Option<&Path>,
    limit: Option<u32>,
    enrich: bool,
    json: bool,
) -> anyhow::Result<()> {
    let config = config::load();

    let raw = read_input(file)?;
    let queries = parse_query_list(&raw);
    if queries.is_empty() {
        eprintln!("No songs found in input.");
        return Ok(());
    }

    let token = access_token(token, &config)?;
    let limit = limit.unwrap_or(config.primary.search_limit);
    let service = CatalogService::from_config(&config, &token)?;

    tracing::debug!("Resolving {} queries (limit {})", queries.len(), limit);

    let results = rt
        .block_on(async {
            if enrich {
                service.resolve_enriched(&queries, limit).await
            } else {
                service.resolve_all(&queries, limit).await.map(|results| {
                    results.into_iter().map(ResolvedQuery::from).collect()
                })
            }
        })
        .with_context("Failed to resolve song list")
        .map_err(explain)?;

    if json {
        print_json(ResolveReport { results: &results })?;
    } else {
        print_table(&results);
    }
    Ok(())
}

fn print_table(results: &[ResolvedQuery]) {
    let mut matched = 0;
    for (i, result) in results.iter().enumerate() {
        match result.matches.first() {
            Some(best) => {
                matched += 1;
                println!("{:>3}. ✓ {}", i + 1, describe(best));
            }
            None => println!("{:>3}. ✗ {} (no match)", i + 1, result.query),
        }
    }
    println!();
    println!("Matched {}/{} songs", matched, results.len());
}

fn describe(track: &EnrichableTrack) -> String {
    let bpm = match track.bpm {
        0 => "? BPM".to_string(),
        bpm => format!("{} BPM", bpm),
    };
    let preview = if track.track.preview_url.is_some() {
        "preview"
    } else {
        "no preview"
    };
    format!(
        "{} - {} [{}, {}]",
        track.track.artist, track.track.name, bpm, preview
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{enrichable, populated};

    #[test]
    fn test_describe_unknown_fields() {
        let track = enrichable("t1", "Creep", "Radiohead");
        assert_eq!(describe(&track), "Radiohead - Creep [? BPM, no preview]");
    }

    #[test]
    fn test_describe_populated() {
        let track = populated("t1", "Levitating", "Dua Lipa", 103);
        assert_eq!(describe(&track), "Dua Lipa - Levitating [103 BPM, preview]");
    }
}
