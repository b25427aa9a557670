use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::warning;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Not authenticated, please log in via /login")]
    NotAuthenticated,

    #[error("OAuth state mismatch")]
    OAuthStateMismatch,

    #[error("Spotify authorization failed: {0}")]
    OAuthProvider(String),

    #[error("User '{0}' not found")]
    UserNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::NotAuthenticated => StatusCode::UNAUTHORIZED,
            Error::OAuthStateMismatch | Error::OAuthProvider(_) => StatusCode::BAD_REQUEST,
            Error::UserNotFound(_) => StatusCode::NOT_FOUND,
            Error::Http(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    /// Client errors carry their message. Server errors only carry the status
    /// reason, the detail goes to the log.
    fn into_response(self) -> Response {
        let status = self.status();
        let reason = status.canonical_reason().unwrap_or("error");
        let message = if status.is_server_error() {
            warning!("{} failed: {}", status, self);
            reason.to_string()
        } else {
            self.to_string()
        };

        let body = json!({
            "error": reason,
            "message": message,
        });
        (status, Json(body)).into_response()
    }
}
