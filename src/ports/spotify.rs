use crate::error::Result;

/// Port trait wrapping the Spotify Web API capabilities the workflows need.
///
/// The production implementation lives in `spotify::client`; tests use the
/// generated mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SpotifyApi: Send + Sync {
    /// Every track URI in a playlist, in playlist order, across all pages.
    async fn playlist_tracks(&self, playlist_id: &str) -> Result<Vec<String>>;

    /// Create an empty playlist for the configured user and return its id.
    async fn create_playlist(&self, name: &str, description: &str, public: bool) -> Result<String>;

    /// Append `uris` to a playlist, or prepend them when `prepend` is set.
    async fn add_tracks(&self, playlist_id: &str, uris: &[String], prepend: bool) -> Result<()>;

    /// Remove every occurrence of each of `uris` from a playlist.
    async fn remove_tracks(&self, playlist_id: &str, uris: &[String]) -> Result<()>;
}
