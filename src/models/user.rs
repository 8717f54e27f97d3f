//! Authenticated user as held in the session.

use serde::Serialize;

/// User record built at the OAuth callback and held in the session.
///
/// The access token is a bearer credential treated as opaque; it is
/// skipped when the user is serialized into a template context.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Spotify user ID
    pub id: String,
    /// Display name from the Spotify profile
    pub display_name: String,
    /// Bearer token for Spotify Web API calls
    #[serde(skip_serializing)]
    pub access_token: String,
}
