pub mod client;
pub mod reference;
pub mod types;

pub use client::SpotifyClient;

/// Shareable web player URL for a playlist.
pub fn playlist_open_url(playlist_id: &str) -> String {
    format!("https://open.spotify.com/playlist/{playlist_id}")
}
