// SPDX-License-Identifier: MIT

//! Application error types with consistent HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Application error type that converts to HTTP responses.
///
/// Upstream failures are logged at the boundary and surfaced to the
/// client as a bare 500 with no detail.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Spotify API error: {0}")]
    SpotifyApi(String),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::SpotifyApi(msg) => {
                tracing::error!(error = %msg, "Spotify API error");
            }
            AppError::Template(err) => {
                tracing::error!(error = %err, "Template rendering error");
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
            }
        }

        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
