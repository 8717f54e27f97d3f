// SPDX-License-Identifier: MIT

//! Session authentication middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;

use crate::session::SESSION_COOKIE;
use crate::AppState;

/// Middleware that requires an authenticated session.
///
/// An unauthenticated request is not an error: it is redirected to the
/// consent-initiation route instead of reaching the handler.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, Redirect> {
    let user = jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| state.sessions.get(cookie.value()));

    match user {
        Some(user) => {
            request.extensions_mut().insert(user);
            Ok(next.run(request).await)
        }
        None => Err(Redirect::temporary("/auth/spotify")),
    }
}
