// SPDX-License-Identifier: MIT

//! Spotify Web API client.
//!
//! Handles:
//! - Authorization-code exchange and profile retrieval
//! - Fetching the current user's top tracks
//! - Fetching the curated "global top tracks" playlist
//!
//! Track items are passed through to callers unexamined.

use serde::Deserialize;
use serde_json::Value;

use crate::error::AppError;
use crate::models::User;

/// OAuth callback URL registered with the provider. Fixed, not configurable.
pub const CALLBACK_URL: &str = "http://localhost:3000/auth/callback";

/// Scopes requested at consent.
pub const SCOPES: [&str; 3] = ["user-read-email", "user-read-private", "user-top-read"];

/// Curated playlist rendered as "global top tracks". The literal resource
/// reference is preserved as-is.
pub const GLOBAL_TOP_TRACKS_PLAYLIST: &str = "37i9dQZEVXbMDoHDwVN2tF";

/// Spotify API client with OAuth credentials.
#[derive(Clone)]
pub struct SpotifyClient {
    http: reqwest::Client,
    api_base_url: String,
    accounts_base_url: String,
    client_id: String,
    client_secret: String,
}

impl SpotifyClient {
    /// Create a new Spotify client with OAuth credentials.
    pub fn new(client_id: String, client_secret: String) -> Self {
        Self::with_base_urls(
            client_id,
            client_secret,
            "https://api.spotify.com".to_string(),
            "https://accounts.spotify.com".to_string(),
        )
    }

    /// Create a client against alternate base URLs (tests).
    pub fn with_base_urls(
        client_id: String,
        client_secret: String,
        api_base_url: String,
        accounts_base_url: String,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base_url,
            accounts_base_url,
            client_id,
            client_secret,
        }
    }

    /// Build the consent-initiation URL.
    ///
    /// `show_dialog=true` forces the consent dialog even if the user has
    /// already granted access. The `state` parameter is kept last so
    /// callers can recover it from the redirect URL.
    pub fn authorize_url(&self, state: &str) -> String {
        format!(
            "{}/authorize?\
             client_id={}&\
             response_type=code&\
             redirect_uri={}&\
             scope={}&\
             show_dialog=true&\
             state={}",
            self.accounts_base_url,
            self.client_id,
            urlencoding::encode(CALLBACK_URL),
            urlencoding::encode(&SCOPES.join(" ")),
            state
        )
    }

    /// Complete the OAuth flow: exchange the authorization code for an
    /// access token, then fetch the user's profile.
    pub async fn complete_auth(&self, code: &str) -> Result<User, AppError> {
        let token = self.exchange_code(code).await?;
        let profile = self.get_profile(&token.access_token).await?;

        Ok(User {
            display_name: profile.display_name.unwrap_or_else(|| profile.id.clone()),
            id: profile.id,
            access_token: token.access_token,
        })
    }

    /// Fetch the current user's top tracks. Returns the raw `items` array.
    pub async fn fetch_top_tracks(&self, access_token: &str) -> Result<Vec<Value>, AppError> {
        let url = format!("{}/v1/me/top/tracks", self.api_base_url);
        let body: ItemsEnvelope = self.get_json(&url, access_token).await?;
        Ok(body.items)
    }

    /// Fetch the curated global playlist. Returns the raw `items` array.
    pub async fn fetch_global_top_tracks(
        &self,
        access_token: &str,
    ) -> Result<Vec<Value>, AppError> {
        let url = format!(
            "{}/v1/playlists/{}",
            self.api_base_url, GLOBAL_TOP_TRACKS_PLAYLIST
        );
        let body: ItemsEnvelope = self.get_json(&url, access_token).await?;
        Ok(body.items)
    }

    /// Exchange an authorization code for an access token.
    async fn exchange_code(&self, code: &str) -> Result<TokenResponse, AppError> {
        let url = format!("{}/api/token", self.accounts_base_url);

        let response = self
            .http
            .post(&url)
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", CALLBACK_URL),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::SpotifyApi(format!("Token exchange request failed: {}", e)))?;

        self.check_response_json(response).await
    }

    /// Get the authenticated user's profile.
    async fn get_profile(&self, access_token: &str) -> Result<SpotifyProfile, AppError> {
        let url = format!("{}/v1/me", self.api_base_url);
        self.get_json(&url, access_token).await
    }

    /// Generic GET request with JSON response.
    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        access_token: &str,
    ) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::SpotifyApi(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::SpotifyApi(format!("HTTP {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::SpotifyApi(format!("JSON parse error: {}", e)))
    }
}

/// Token exchange response from the accounts service.
#[derive(Debug, Clone, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Authenticated user profile response.
#[derive(Debug, Clone, Deserialize)]
struct SpotifyProfile {
    id: String,
    display_name: Option<String>,
}

/// Envelope for endpoints that return an `items` array.
#[derive(Debug, Deserialize)]
struct ItemsEnvelope {
    items: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> SpotifyClient {
        SpotifyClient::new("client_id".to_string(), "client_secret".to_string())
    }

    #[test]
    fn test_authorize_url_contains_required_params() {
        let url = test_client().authorize_url("abc123");

        assert!(url.starts_with("https://accounts.spotify.com/authorize?"));
        assert!(url.contains("client_id=client_id"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("show_dialog=true"));
        assert!(url.contains("user-read-email"));
        assert!(url.contains("user-top-read"));
        assert!(url.ends_with("state=abc123"));
    }

    #[test]
    fn test_authorize_url_encodes_callback() {
        let url = test_client().authorize_url("s");
        assert!(url.contains(urlencoding::encode(CALLBACK_URL).as_ref()));
        assert!(!url.contains("redirect_uri=http://localhost"));
    }

    #[test]
    fn test_items_envelope_parses() {
        let body = r#"{"items": [{"name": "T1"}, {"name": "T2"}], "total": 2}"#;
        let envelope: ItemsEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.items.len(), 2);
        assert_eq!(envelope.items[0]["name"], "T1");
    }
}
