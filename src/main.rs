// SPDX-License-Identifier: MIT

//! Toptracks web server.
//!
//! Authenticates against Spotify via OAuth and renders the user's top
//! tracks and a curated global playlist.

use std::sync::Arc;

use toptracks::{
    config::Config, render::build_templates, services::SpotifyClient,
    session::InMemorySessionStore, AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Toptracks");

    let templates = build_templates().expect("Failed to build templates");

    let spotify = SpotifyClient::new(
        config.spotify_client_id.clone(),
        config.spotify_client_secret.clone(),
    );

    // Sessions live in process memory only
    let sessions = Arc::new(InMemorySessionStore::new());

    let state = Arc::new(AppState {
        config: config.clone(),
        sessions,
        spotify,
        templates,
    });

    let app = toptracks::routes::create_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize logging with an env-filter.
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("toptracks=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
