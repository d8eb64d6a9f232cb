//! Wire types for the handful of Spotify Web API endpoints we call.

use serde::{Deserialize, Serialize};

/// One page of a playlist's tracks.
///
/// `next` is the full URL of the following page, absent on the last one.
#[derive(Debug, Deserialize)]
pub struct PlaylistItemsPage {
    pub items: Vec<PlaylistItem>,
    pub next: Option<String>,
}

impl PlaylistItemsPage {
    /// Track URIs on this page, in order. Items without a track (removed
    /// from the catalog, or local files the API returns as null) are skipped.
    pub fn track_uris(&self) -> impl Iterator<Item = &str> {
        self.items
            .iter()
            .filter_map(|item| item.track.as_ref())
            .map(|track| track.uri.as_str())
    }
}

#[derive(Debug, Deserialize)]
pub struct PlaylistItem {
    #[serde(default)]
    pub track: Option<PlaylistTrack>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistTrack {
    pub uri: String,
}

#[derive(Debug, Serialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
}

#[derive(Debug, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct AddTracksRequest {
    pub uris: Vec<String>,
    /// Insertion index; omitted entirely for a plain append.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct RemoveTracksRequest {
    pub tracks: Vec<RemoveTrack>,
}

#[derive(Debug, Serialize)]
pub struct RemoveTrack {
    pub uri: String,
}
