use url::Url;

use crate::error::{MixtapeError, Result};

/// Extract the playlist id from a config reference.
///
/// Accepts a bare id, an `open.spotify.com` share link (query string and
/// all), or a `spotify:playlist:` URI.
pub fn playlist_id(reference: &str) -> Result<String> {
    if reference.is_empty() {
        return Err(MixtapeError::Parse("empty playlist reference".to_string()));
    }

    let id = match Url::parse(reference) {
        Ok(url) => match url.path_segments() {
            Some(mut segments) => segments.next_back().unwrap_or_default().to_string(),
            // spotify:playlist:id parses as a cannot-be-a-base URL whose
            // whole path is one opaque segment.
            None => url
                .path()
                .rsplit(':')
                .next()
                .unwrap_or_default()
                .to_string(),
        },
        // Bare id, or a scheme-less link someone trimmed by hand.
        Err(_) => reference
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string(),
    };

    if id.is_empty() {
        return Err(MixtapeError::Parse(format!(
            "no playlist id in {reference:?}"
        )));
    }
    Ok(id)
}
