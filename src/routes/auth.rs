// SPDX-License-Identifier: MIT

//! Spotify OAuth authentication routes.

use axum::{
    extract::{Query, State},
    response::Redirect,
    routing::get,
    Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{AppError, Result};
use crate::session::{new_session_id, SESSION_COOKIE};
use crate::AppState;

type HmacSha256 = Hmac<Sha256>;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/spotify", get(auth_start))
        .route("/auth/callback", get(auth_callback))
        .route("/logout", get(logout))
}

/// Start OAuth flow - redirect to Spotify authorization with a signed
/// state parameter.
async fn auth_start(State(state): State<Arc<AppState>>) -> Result<Redirect> {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("System time error: {}", e)))?
        .as_millis();

    let oauth_state = sign_state(timestamp, &state.config.session_secret)?;
    let auth_url = state.spotify.authorize_url(&oauth_state);

    tracing::info!(
        client_id = %state.config.spotify_client_id,
        "Starting OAuth flow, redirecting to Spotify"
    );

    Ok(Redirect::temporary(&auth_url))
}

#[derive(Deserialize)]
pub struct CallbackParams {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// OAuth callback - verify state, exchange code for a token, create a
/// session.
///
/// Every failure branch redirects home without a session; there is no
/// distinct error page for a declined or failed login.
async fn auth_callback(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Query(params): Query<CallbackParams>,
) -> Result<(CookieJar, Redirect)> {
    if let Some(error) = params.error {
        tracing::warn!(error = %error, "OAuth error from Spotify");
        return Ok((jar, Redirect::temporary("/")));
    }

    let (code, oauth_state) = match (params.code, params.state) {
        (Some(code), Some(oauth_state)) => (code, oauth_state),
        _ => {
            tracing::warn!("OAuth callback missing code or state parameter");
            return Ok((jar, Redirect::temporary("/")));
        }
    };

    if !verify_state(&oauth_state, &state.config.session_secret) {
        tracing::warn!("Invalid or tampered OAuth state parameter");
        return Ok((jar, Redirect::temporary("/")));
    }

    tracing::info!("Exchanging authorization code for token");

    let user = match state.spotify.complete_auth(&code).await {
        Ok(user) => user,
        Err(e) => {
            tracing::error!(error = %e, "OAuth code exchange failed");
            return Ok((jar, Redirect::temporary("/")));
        }
    };

    tracing::info!(
        user_id = %user.id,
        display_name = %user.display_name,
        "OAuth successful, session established"
    );

    let session_id = new_session_id()?;
    state.sessions.set(&session_id, user);

    let cookie = Cookie::build((SESSION_COOKIE, session_id))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);

    Ok((jar.add(cookie), Redirect::temporary("/")))
}

/// Logout - clear the session and drop the cookie.
async fn logout(State(state): State<Arc<AppState>>, jar: CookieJar) -> (CookieJar, Redirect) {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.sessions.clear(cookie.value());
    }

    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    (jar, Redirect::temporary("/"))
}

/// Sign a timestamp into an opaque OAuth state parameter.
fn sign_state(timestamp: u128, secret: &[u8]) -> Result<String> {
    let payload = format!("{:x}", timestamp);

    let mut mac = HmacSha256::new_from_slice(secret)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("HMAC init failed: {}", e)))?;
    mac.update(payload.as_bytes());
    let signature = mac.finalize().into_bytes();

    let signed = format!("{}|{}", payload, hex::encode(signature));
    Ok(URL_SAFE_NO_PAD.encode(signed.as_bytes()))
}

/// Verify the HMAC signature on an OAuth state parameter.
fn verify_state(state: &str, secret: &[u8]) -> bool {
    let Ok(bytes) = URL_SAFE_NO_PAD.decode(state) else {
        return false;
    };
    let Ok(state_str) = String::from_utf8(bytes) else {
        return false;
    };

    // Format is "timestamp_hex|signature_hex"
    let Some((payload, signature_hex)) = state_str.split_once('|') else {
        return false;
    };

    let Ok(mut mac) = HmacSha256::new_from_slice(secret) else {
        return false;
    };
    mac.update(payload.as_bytes());

    let expected = hex::encode(mac.finalize().into_bytes());
    signature_hex == expected
}
