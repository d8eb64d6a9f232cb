use std::collections::HashSet;

use crate::error::Result;
use crate::ports::spotify::SpotifyApi;
use crate::spotify::reference;

/// Spotify caps playlist mutations at 100 tracks per request.
pub const BATCH_LIMIT: usize = 100;

/// Fetch every track of every source playlist, concatenated in config order.
///
/// Duplicates are kept; callers decide when to dedup.
pub async fn collect_source_tracks<S: SpotifyApi>(
    spotify: &S,
    references: &[String],
) -> Result<Vec<String>> {
    let mut all_uris = Vec::new();
    for reference in references {
        let playlist_id = reference::playlist_id(reference)?;
        let uris = spotify.playlist_tracks(&playlist_id).await?;
        tracing::debug!("Fetched {} tracks from playlist {}", uris.len(), playlist_id);
        all_uris.extend(uris);
    }
    Ok(all_uris)
}

/// Drop repeated URIs, keeping the first occurrence in place.
pub fn dedup_keeping_first(uris: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for uri in uris {
        if seen.insert(uri.as_str()) {
            unique.push(uri.clone());
        }
    }
    unique
}

/// Split into slices no longer than [`BATCH_LIMIT`]. Empty input yields no
/// batches at all, so callers never issue empty requests.
pub fn batches(uris: &[String]) -> Vec<&[String]> {
    uris.chunks(BATCH_LIMIT).collect()
}
