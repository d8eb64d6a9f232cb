use std::time::Duration;

use serde::Deserialize;

use crate::error::{MixtapeError, Result};

/// Default address of the companion token service.
pub const TOKEN_SERVICE_URL: &str = "http://localhost:1337";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Client for the sidecar that holds the Spotify OAuth session.
///
/// mixtape never talks to accounts.spotify.com itself; it expects a
/// ready-to-use bearer token from this endpoint.
pub struct TokenService {
    base_url: String,
    http: reqwest::Client,
}

impl TokenService {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Fetch a bearer token. Nothing can run without one, so every failure
    /// here is an auth error.
    pub async fn bearer_token(&self) -> Result<String> {
        let response = self
            .http
            .get(format!("{}/api/token", self.base_url))
            .timeout(Duration::from_secs(10))
            .send()
            .await
            .map_err(|err| MixtapeError::Auth(format!("token request failed: {err}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| MixtapeError::Auth(format!("token response unreadable: {err}")))?;
        if !status.is_success() {
            return Err(MixtapeError::Auth(format!(
                "token service returned {status}: {body}"
            )));
        }

        let token: TokenResponse = serde_json::from_str(&body)
            .map_err(|err| MixtapeError::Auth(format!("undecodable token response: {err}")))?;
        if token.access_token.is_empty() {
            return Err(MixtapeError::Auth(
                "token service returned an empty access token".to_string(),
            ));
        }
        Ok(token.access_token)
    }
}
