// SPDX-License-Identifier: MIT

//! Toptracks: a small Spotify-backed web app.
//!
//! Authenticates a user against Spotify via the OAuth authorization-code
//! flow, then renders their top tracks and a curated global playlist.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod render;
pub mod routes;
pub mod services;
pub mod session;

use std::sync::Arc;

use config::Config;
use services::SpotifyClient;
use session::SessionStore;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub sessions: Arc<dyn SessionStore>,
    pub spotify: SpotifyClient,
    pub templates: tera::Tera,
}
