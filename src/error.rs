//! API Errors
//! Mission: Map failures to stable HTTP responses without leaking internals

use crate::db::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Error type returned by every handler
#[derive(Debug)]
pub enum ApiError {
    /// Malformed input (400)
    Validation(String),
    /// Duplicate username (409)
    Conflict,
    /// Bad credentials or token (401). The message never says which check failed.
    Authentication,
    /// Target record absent (404)
    NotFound(String),
    /// Persistence or signing failure (500). Logged, never shown.
    Internal(anyhow::Error),
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UsernameTaken => ApiError::Conflict,
            StoreError::Database(e) => ApiError::Internal(e.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict => (StatusCode::CONFLICT, "Username already exists".to_string()),
            ApiError::Authentication => {
                (StatusCode::UNAUTHORIZED, "Authentication failed".to_string())
            }
            // Plain text, as existing clients expect
            ApiError::NotFound(msg) => return (StatusCode::NOT_FOUND, msg).into_response(),
            ApiError::Internal(err) => {
                tracing::error!("Internal error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
