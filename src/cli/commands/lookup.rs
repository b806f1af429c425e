//! Secondary-catalog lookup and title normalization commands.

use tokio::runtime::Runtime;

use crate::catalog::normalize::normalize;
use crate::catalog::{DeezerLookup, Lookup};
use crate::config;

/// Run the BPM and preview lookups for one track
pub fn cmd_lookup(rt: &Runtime, artist: &str, title: &str) -> anyhow::Result<()> {
    let config = config::load();
    let deezer = DeezerLookup::new(config.secondary)?;

    println!("Looking up: {} - {}", artist, title);
    println!("Normalized title: {:?}", normalize(title));
    println!();

    let (bpm, preview) = rt.block_on(async {
        tokio::join!(
            deezer.find_bpm(artist, title),
            deezer.find_preview_url(artist, title)
        )
    });

    match bpm {
        Lookup::Found(bpm) => println!("✓ BPM:     {}", bpm),
        Lookup::NotFound => println!("✗ BPM:     not found"),
    }
    match preview {
        Lookup::Found(url) => println!("✓ Preview: {}", url),
        Lookup::NotFound => println!("✗ Preview: not found"),
    }
    Ok(())
}

/// Print the normalized form of a title
pub fn cmd_normalize(title: &str) {
    println!("{}", normalize(title));
}
