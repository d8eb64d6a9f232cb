use crate::config::Config;
use crate::error::Result;
use crate::ports::spotify::SpotifyApi;
use crate::services::tracklist::{batches, collect_source_tracks, dedup_keeping_first};

/// Outcome of a `create` run.
#[derive(Debug)]
pub struct CreateSummary {
    pub playlist_id: String,
    pub added: usize,
}

/// Build a brand-new playlist from the configured sources.
pub async fn run<S: SpotifyApi>(spotify: &S, config: &Config) -> Result<CreateSummary> {
    config.validate()?;

    let tracks = collect_source_tracks(spotify, config.playlists()).await?;
    let unique = dedup_keeping_first(&tracks);
    tracing::info!(
        "Collected {} tracks ({} unique) from {} source playlists",
        tracks.len(),
        unique.len(),
        config.playlists().len()
    );

    let settings = config.new_playlist();
    let playlist_id = spotify
        .create_playlist(&settings.name, &settings.description, settings.public)
        .await?;

    let add_batches = batches(&unique);
    tracing::debug!("Adding tracks in {} batches", add_batches.len());
    for batch in add_batches {
        spotify.add_tracks(&playlist_id, batch, false).await?;
    }

    Ok(CreateSummary {
        playlist_id,
        added: unique.len(),
    })
}
