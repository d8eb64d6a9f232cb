use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Deserialize;

use crate::error::{MixtapeError, Result};

const DEFAULT_DESCRIPTION: &str = "Created with mixtape";

fn default_token_service_url() -> String {
    crate::token::TOKEN_SERVICE_URL.to_string()
}

#[derive(Debug, Deserialize)]
pub struct Config {
    user_id: String,
    playlists: Vec<String>,
    #[serde(default)]
    destination: Option<String>,
    #[serde(default = "default_token_service_url")]
    token_service_url: String,
    #[serde(default)]
    new_playlist: Option<NewPlaylistConfig>,
}

/// Optional `[new_playlist]` overrides for the `create` command.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewPlaylistConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub public: Option<bool>,
}

/// Fully resolved settings for the playlist `create` builds.
#[derive(Debug, Clone)]
pub struct NewPlaylist {
    pub name: String,
    pub description: String,
    pub public: bool,
}

impl Config {
    /// Load config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|err| {
            MixtapeError::Config(format!(
                "Failed to read config file {}: {err}",
                path.display()
            ))
        })?;
        let config: Config = toml::from_str(&contents).map_err(|err| {
            MixtapeError::Config(format!(
                "Failed to parse config file {}: {err}",
                path.display()
            ))
        })?;
        Ok(config)
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|path| path.join("mixtape").join("config.toml"))
    }

    /// Load config from the default per-user path
    pub fn load() -> Result<Self> {
        let path = Self::config_path()
            .ok_or_else(|| MixtapeError::Config("No config file path found".to_string()))?;
        Self::from_file(&path)
    }

    /// Reject configs that cannot drive any run.
    pub fn validate(&self) -> Result<()> {
        if self.user_id.is_empty() {
            return Err(MixtapeError::Config("user_id must not be empty".to_string()));
        }
        if self.playlists.is_empty() {
            return Err(MixtapeError::Config(
                "at least one source playlist is required".to_string(),
            ));
        }
        Ok(())
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Source playlist references, in declaration order.
    pub fn playlists(&self) -> &[String] {
        &self.playlists
    }

    pub fn token_service_url(&self) -> &str {
        &self.token_service_url
    }

    /// The destination playlist reference; `sync` refuses to run without one.
    pub fn sync_destination(&self) -> Result<&str> {
        self.destination
            .as_deref()
            .ok_or_else(|| MixtapeError::Config("sync requires a destination playlist".to_string()))
    }

    /// Settings for the playlist `create` builds, falling back to a
    /// timestamped name and a stock description.
    pub fn new_playlist(&self) -> NewPlaylist {
        let overrides = self.new_playlist.clone().unwrap_or_default();
        NewPlaylist {
            name: overrides
                .name
                .unwrap_or_else(|| format!("Playlist {}", Utc::now().timestamp())),
            description: overrides
                .description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            public: overrides.public.unwrap_or(false),
        }
    }
}
