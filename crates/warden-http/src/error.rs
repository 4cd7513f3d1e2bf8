//! HTTP error mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use warden_auth::AuthError;
use warden_directory::AccountsError;

/// Errors surfaced by the REST front-end.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Accounts(#[from] AccountsError),

    /// Request body failed validation.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // The specific failure kind stays server-side; clients get a
        // generic message per status class.
        let (status, message) = match &self {
            ApiError::Auth(err) => {
                tracing::debug!(error = %err, "request rejected by auth");
                match err {
                    AuthError::PermissionDenied => (StatusCode::FORBIDDEN, "permission denied"),
                    AuthError::UpstreamUnavailable(_) => {
                        tracing::warn!(error = %err, "identity directory unavailable");
                        (StatusCode::INTERNAL_SERVER_ERROR, "internal error")
                    }
                    _ => (StatusCode::UNAUTHORIZED, "unauthenticated"),
                }
            }
            ApiError::Accounts(err) => match err {
                AccountsError::InvalidCredentials => {
                    (StatusCode::UNAUTHORIZED, "invalid credentials")
                }
                AccountsError::NotFound => (StatusCode::NOT_FOUND, "user not found"),
                AccountsError::EmailTaken => (StatusCode::CONFLICT, "email already registered"),
                _ => {
                    tracing::error!(error = %err, "account operation failed");
                    (StatusCode::INTERNAL_SERVER_ERROR, "internal error")
                }
            },
            ApiError::InvalidRequest(reason) => {
                tracing::debug!(%reason, "bad request");
                (StatusCode::BAD_REQUEST, "invalid request")
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
