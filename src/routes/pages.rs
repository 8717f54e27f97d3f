// SPDX-License-Identifier: MIT

//! Server-rendered pages.

use axum::{extract::State, response::Html, Extension};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;
use tera::Context;

use crate::error::Result;
use crate::models::User;
use crate::session::SESSION_COOKIE;
use crate::AppState;

/// Home page. Renders for anonymous and authenticated users alike;
/// never redirects to the consent flow.
pub async fn home(State(state): State<Arc<AppState>>, jar: CookieJar) -> Result<Html<String>> {
    let mut ctx = Context::new();

    if let Some(user) = jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| state.sessions.get(cookie.value()))
    {
        ctx.insert("user", &user);
    }

    let body = state.templates.render("index.html", &ctx)?;
    Ok(Html(body))
}

/// The current user's top tracks, in upstream order.
pub async fn top_tracks(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
) -> Result<Html<String>> {
    let tracks = state.spotify.fetch_top_tracks(&user.access_token).await?;

    tracing::debug!(user_id = %user.id, count = tracks.len(), "Fetched top tracks");

    let mut ctx = Context::new();
    ctx.insert("user", &user);
    ctx.insert("tracks", &tracks);

    let body = state.templates.render("top-tracks.html", &ctx)?;
    Ok(Html(body))
}

/// Playlist generator: the user's top tracks next to the curated global
/// playlist. Both fetches must succeed; a failure in either fails the
/// whole request.
pub async fn playlist_generator(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
) -> Result<Html<String>> {
    let user_top_tracks = state.spotify.fetch_top_tracks(&user.access_token).await?;
    let global_top_tracks = state
        .spotify
        .fetch_global_top_tracks(&user.access_token)
        .await?;

    tracing::debug!(
        user_id = %user.id,
        user_tracks = user_top_tracks.len(),
        global_tracks = global_top_tracks.len(),
        "Fetched playlist generator data"
    );

    let mut ctx = Context::new();
    ctx.insert("user", &user);
    ctx.insert("user_top_tracks", &user_top_tracks);
    ctx.insert("global_top_tracks", &global_top_tracks);

    let body = state.templates.render("playlist-generator.html", &ctx)?;
    Ok(Html(body))
}
