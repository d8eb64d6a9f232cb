mod config;
mod error;
mod logging;
mod ports;
mod services;
mod spotify;
mod token;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use color_eyre::{Result, eyre::Context};

use crate::config::Config;
use crate::logging::init_logging;
use crate::spotify::SpotifyClient;
use crate::token::TokenService;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Console log level
    #[arg(long, default_value = "info", global = true, env = "MIXTAPE_LOG")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Combine the source playlists into a brand new playlist
    Create {
        /// The config file to use
        #[arg(short, long, env = "MIXTAPE_CONFIG")]
        config: Option<PathBuf>,
    },
    /// Reconcile the destination playlist with the source playlists
    Sync {
        /// The config file to use
        #[arg(short, long, env = "MIXTAPE_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level)?;

    match args.command {
        Commands::Create { config } => {
            let started = Instant::now();
            let config = load_config(config)?;
            let spotify = connect(&config).await?;

            let summary = services::create::run(&spotify, &config).await?;
            tracing::info!(
                "Created playlist {} with {} tracks",
                summary.playlist_id,
                summary.added
            );
            println!(
                "Playlist: {}",
                crate::spotify::playlist_open_url(&summary.playlist_id)
            );
            println!("Created in: {}", format_elapsed(started));
        }
        Commands::Sync { config } => {
            let started = Instant::now();
            let config = load_config(config)?;
            let spotify = connect(&config).await?;

            let summary = services::sync::run(&spotify, &config).await?;
            tracing::info!(
                "Synced playlist {}: {} added, {} removed",
                summary.playlist_id,
                summary.added,
                summary.removed
            );
            println!(
                "Playlist: {}",
                crate::spotify::playlist_open_url(&summary.playlist_id)
            );
            println!("Synced in: {}", format_elapsed(started));
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config = match path {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            Config::from_file(&path)
        }
        None => {
            tracing::debug!("Loading config from the default path");
            Config::load()
        }
    }
    .with_context(|| "Failed to load mixtape config")?;
    Ok(config)
}

/// Fetch a bearer token and build the API client.
async fn connect(config: &Config) -> Result<SpotifyClient> {
    let token = TokenService::new(config.token_service_url().to_string())
        .bearer_token()
        .await?;
    Ok(SpotifyClient::new(token, config.user_id().to_string()))
}

fn format_elapsed(started: Instant) -> String {
    let elapsed = Duration::from_millis(started.elapsed().as_millis() as u64);
    humantime::format_duration(elapsed).to_string()
}
