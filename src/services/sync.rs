use crate::config::Config;
use crate::error::Result;
use crate::ports::spotify::SpotifyApi;
use crate::services::diff::PlaylistDiff;
use crate::services::tracklist::{batches, collect_source_tracks};
use crate::spotify::reference;

/// Outcome of a `sync` run.
#[derive(Debug)]
pub struct SyncSummary {
    pub playlist_id: String,
    pub added: usize,
    pub removed: usize,
}

/// Reconcile the destination playlist with the configured sources.
///
/// Stale destination tracks are removed first, then missing tracks are
/// prepended so the newest additions sit at the top of the playlist.
pub async fn run<S: SpotifyApi>(spotify: &S, config: &Config) -> Result<SyncSummary> {
    config.validate()?;
    let playlist_id = reference::playlist_id(config.sync_destination()?)?;

    let destination_tracks = spotify.playlist_tracks(&playlist_id).await?;
    let source_tracks = collect_source_tracks(spotify, config.playlists()).await?;

    let diff = PlaylistDiff::between(&destination_tracks, &source_tracks);
    if diff.is_empty() {
        tracing::info!("Destination already matches the sources");
    } else {
        tracing::info!(
            "Adding {} tracks, removing {}",
            diff.to_add.len(),
            diff.to_remove.len()
        );
    }

    let remove_batches = batches(&diff.to_remove);
    let add_batches = batches(&diff.to_add);
    tracing::debug!(
        "{} remove batches, {} add batches",
        remove_batches.len(),
        add_batches.len()
    );

    for batch in remove_batches {
        spotify.remove_tracks(&playlist_id, batch).await?;
    }

    // Every batch lands at position 0, so later batches push earlier ones
    // down. Walking the batches in reverse keeps the combined source order
    // intact at the top of the playlist.
    for batch in add_batches.into_iter().rev() {
        spotify.add_tracks(&playlist_id, batch, true).await?;
    }

    Ok(SyncSummary {
        playlist_id,
        added: diff.to_add.len(),
        removed: diff.to_remove.len(),
    })
}
