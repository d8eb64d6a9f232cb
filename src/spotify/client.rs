use std::time::Duration;

use crate::error::{MixtapeError, Result};
use crate::ports::spotify::SpotifyApi;
use crate::spotify::types::{
    AddTracksRequest, CreatePlaylistRequest, CreatePlaylistResponse, PlaylistItemsPage,
    RemoveTrack, RemoveTracksRequest,
};

pub const SPOTIFY_API_URL: &str = "https://api.spotify.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Spotify Web API client.
///
/// Holds a bearer token obtained out of band; no refresh is attempted, a
/// rejected token surfaces as an API error like any other failed call.
pub struct SpotifyClient {
    base_url: String,
    token: String,
    user_id: String,
    http: reqwest::Client,
}

impl SpotifyClient {
    pub fn new(token: String, user_id: String) -> Self {
        Self::with_base_url(SPOTIFY_API_URL.to_string(), token, user_id)
    }

    pub fn with_base_url(base_url: String, token: String, user_id: String) -> Self {
        Self {
            base_url,
            token,
            user_id,
            http: reqwest::Client::new(),
        }
    }

    async fn fetch_page(&self, url: &str) -> Result<PlaylistItemsPage> {
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;
        let body = success_body(response).await?;
        serde_json::from_str(&body)
            .map_err(|err| MixtapeError::Parse(format!("undecodable playlist page: {err}")))
    }
}

/// Read the body, turning any non-2xx status into an API error carrying it.
async fn success_body(response: reqwest::Response) -> Result<String> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(MixtapeError::Api {
            status: status.as_u16(),
            message: body,
        });
    }
    Ok(body)
}

#[async_trait::async_trait]
impl SpotifyApi for SpotifyClient {
    async fn playlist_tracks(&self, playlist_id: &str) -> Result<Vec<String>> {
        let mut all_uris = Vec::new();
        let mut next_url = Some(format!(
            "{}/v1/playlists/{playlist_id}/tracks?limit=100",
            self.base_url
        ));

        while let Some(url) = next_url {
            let page = self.fetch_page(&url).await?;
            all_uris.extend(page.track_uris().map(str::to_string));
            next_url = page.next;
        }

        Ok(all_uris)
    }

    async fn create_playlist(&self, name: &str, description: &str, public: bool) -> Result<String> {
        let response = self
            .http
            .post(format!(
                "{}/v1/users/{}/playlists",
                self.base_url, self.user_id
            ))
            .bearer_auth(&self.token)
            .timeout(REQUEST_TIMEOUT)
            .json(&CreatePlaylistRequest {
                name: name.to_string(),
                description: description.to_string(),
                public,
            })
            .send()
            .await?;
        let body = success_body(response).await?;
        let created: CreatePlaylistResponse = serde_json::from_str(&body).map_err(|err| {
            MixtapeError::Parse(format!("undecodable create-playlist response: {err}"))
        })?;
        Ok(created.id)
    }

    async fn add_tracks(&self, playlist_id: &str, uris: &[String], prepend: bool) -> Result<()> {
        let response = self
            .http
            .post(format!(
                "{}/v1/playlists/{playlist_id}/tracks",
                self.base_url
            ))
            .bearer_auth(&self.token)
            .timeout(REQUEST_TIMEOUT)
            .json(&AddTracksRequest {
                uris: uris.to_vec(),
                position: prepend.then_some(0),
            })
            .send()
            .await?;
        success_body(response).await?;
        Ok(())
    }

    async fn remove_tracks(&self, playlist_id: &str, uris: &[String]) -> Result<()> {
        let response = self
            .http
            .delete(format!(
                "{}/v1/playlists/{playlist_id}/tracks",
                self.base_url
            ))
            .bearer_auth(&self.token)
            .timeout(REQUEST_TIMEOUT)
            .json(&RemoveTracksRequest {
                tracks: uris
                    .iter()
                    .map(|uri| RemoveTrack { uri: uri.clone() })
                    .collect(),
            })
            .send()
            .await?;
        success_body(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> SpotifyClient {
        SpotifyClient::with_base_url(server.uri(), "test-token".to_string(), "someone".to_string())
    }

    #[tokio::test]
    async fn test_playlist_tracks_follows_pagination() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/playlists/p1/tracks"))
            .and(query_param("limit", "100"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    {"track": {"uri": "spotify:track:a"}},
                    {"track": {"uri": "spotify:track:b"}}
                ],
                "next": format!("{}/v1/playlists/p1/tracks?offset=2", server.uri())
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v1/playlists/p1/tracks"))
            .and(query_param("offset", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{"track": {"uri": "spotify:track:c"}}],
                "next": null
            })))
            .expect(1)
            .mount(&server)
            .await;

        let uris = client_for(&server).playlist_tracks("p1").await.unwrap();
        assert_eq!(uris, ["spotify:track:a", "spotify:track:b", "spotify:track:c"]);
    }

    #[tokio::test]
    async fn test_playlist_tracks_skips_missing_tracks() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/playlists/p1/tracks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    {"track": {"uri": "spotify:track:a"}},
                    {"track": null},
                    {"track": {"uri": "spotify:track:b"}}
                ],
                "next": null
            })))
            .mount(&server)
            .await;

        let uris = client_for(&server).playlist_tracks("p1").await.unwrap();
        assert_eq!(uris, ["spotify:track:a", "spotify:track:b"]);
    }

    #[tokio::test]
    async fn test_api_error_carries_status_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/playlists/missing/tracks"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(json!({"error": {"status": 404, "message": "Not found."}})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .playlist_tracks("missing")
            .await
            .unwrap_err();
        match err {
            MixtapeError::Api { status, message } => {
                assert_eq!(status, 404);
                assert!(message.contains("Not found."));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_undecodable_body_is_a_parse_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/playlists/p1/tracks"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server).playlist_tracks("p1").await.unwrap_err();
        assert!(matches!(err, MixtapeError::Parse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_transport_error() {
        let client = SpotifyClient::with_base_url(
            "http://127.0.0.1:1".to_string(),
            "test-token".to_string(),
            "someone".to_string(),
        );

        let err = client.playlist_tracks("p1").await.unwrap_err();
        assert!(matches!(err, MixtapeError::Transport(_)));
    }

    #[tokio::test]
    async fn test_create_playlist_posts_and_returns_id() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/users/someone/playlists"))
            .and(header("authorization", "Bearer test-token"))
            .and(body_json(json!({
                "name": "Road trip",
                "description": "Summer songs",
                "public": false
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "new-playlist"})))
            .expect(1)
            .mount(&server)
            .await;

        let id = client_for(&server)
            .create_playlist("Road trip", "Summer songs", false)
            .await
            .unwrap();
        assert_eq!(id, "new-playlist");
    }

    #[tokio::test]
    async fn test_add_tracks_appends_without_position() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/playlists/p1/tracks"))
            .and(body_json(json!({"uris": ["spotify:track:a", "spotify:track:b"]})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"snapshot_id": "s1"})))
            .expect(1)
            .mount(&server)
            .await;

        let uris = vec!["spotify:track:a".to_string(), "spotify:track:b".to_string()];
        client_for(&server)
            .add_tracks("p1", &uris, false)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_add_tracks_prepends_at_position_zero() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/playlists/p1/tracks"))
            .and(body_json(json!({"uris": ["spotify:track:a"], "position": 0})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"snapshot_id": "s1"})))
            .expect(1)
            .mount(&server)
            .await;

        let uris = vec!["spotify:track:a".to_string()];
        client_for(&server).add_tracks("p1", &uris, true).await.unwrap();
    }

    #[tokio::test]
    async fn test_remove_tracks_sends_delete_body() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/v1/playlists/p1/tracks"))
            .and(body_json(json!({
                "tracks": [{"uri": "spotify:track:a"}, {"uri": "spotify:track:b"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"snapshot_id": "s2"})))
            .expect(1)
            .mount(&server)
            .await;

        let uris = vec!["spotify:track:a".to_string(), "spotify:track:b".to_string()];
        client_for(&server).remove_tracks("p1", &uris).await.unwrap();
    }
}
