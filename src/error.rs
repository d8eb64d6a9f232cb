use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, MixtapeError>;

/// Everything that can abort a run.
///
/// Every variant is fatal: there are no internal retries, and mutations
/// already applied against Spotify are not rolled back.
#[derive(Debug, Error)]
pub enum MixtapeError {
    /// Malformed or missing configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The token service could not produce a usable bearer token.
    #[error("Failed to obtain access token: {0}")]
    Auth(String),

    /// Network-level failure talking to Spotify.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success response from the Spotify Web API, including 429s.
    #[error("Spotify API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Unparseable playlist reference or undecodable response body.
    #[error("Parse error: {0}")]
    Parse(String),
}
