// SPDX-License-Identifier: MIT

use axum::Router;
use std::sync::Arc;
use toptracks::config::Config;
use toptracks::models::User;
use toptracks::render::build_templates;
use toptracks::routes::create_router;
use toptracks::services::SpotifyClient;
use toptracks::session::{InMemorySessionStore, SessionStore};
use toptracks::AppState;

/// Create a test app pointed at the given stub base URLs.
/// Returns the router and the session store for direct seeding.
#[allow(dead_code)]
pub fn create_test_app(api_base: &str, accounts_base: &str) -> (Router, Arc<InMemorySessionStore>) {
    let config = Config::test_default();

    let spotify = SpotifyClient::with_base_urls(
        config.spotify_client_id.clone(),
        config.spotify_client_secret.clone(),
        api_base.to_string(),
        accounts_base.to_string(),
    );

    let store = Arc::new(InMemorySessionStore::new());

    let state = Arc::new(AppState {
        config,
        sessions: store.clone(),
        spotify,
        templates: build_templates().expect("templates should build"),
    });

    (create_router(state), store)
}

/// Create a test app with no reachable upstream.
#[allow(dead_code)]
pub fn offline_test_app() -> (Router, Arc<InMemorySessionStore>) {
    create_test_app("http://127.0.0.1:9", "http://127.0.0.1:9")
}

/// Serve a stub upstream on an ephemeral port, returning its base URL.
#[allow(dead_code)]
pub async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Seed an authenticated session and return its identifier.
#[allow(dead_code)]
pub fn seed_session(store: &InMemorySessionStore) -> String {
    let session_id = "test-session-0000".to_string();
    store.set(
        &session_id,
        User {
            id: "user-1".to_string(),
            display_name: "Test User".to_string(),
            access_token: "test-access-token".to_string(),
        },
    );
    session_id
}
