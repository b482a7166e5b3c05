//! Authentication Middleware
//! Mission: Protect admin endpoints with JWT validation

use crate::auth::{jwt::JwtHandler, models::Claims};
use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

/// Pull the raw token out of an `Authorization` header value.
///
/// `Bearer <token>` is stripped; anything else is taken as the token itself.
pub fn bearer_token(header_value: &str) -> Result<&str, AuthError> {
    let token = header_value
        .strip_prefix("Bearer ")
        .unwrap_or(header_value)
        .trim();

    if token.is_empty() {
        return Err(AuthError::InvalidFormat);
    }
    Ok(token)
}

/// Run the gate on a (possibly absent) `Authorization` header value.
pub fn authorize(header_value: Option<&str>, jwt_handler: &JwtHandler) -> Result<Claims, AuthError> {
    let header_value = header_value.ok_or(AuthError::MissingToken)?;
    let token = bearer_token(header_value)?;

    jwt_handler
        .validate_token(token)
        .map_err(|_| AuthError::InvalidToken)
}

/// Auth middleware that validates JWT tokens
pub async fn auth_middleware(
    State(jwt_handler): State<Arc<JwtHandler>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let header_value = match req.headers().get(AUTHORIZATION) {
        Some(value) => Some(value.to_str().map_err(|_| AuthError::InvalidFormat)?),
        None => None,
    };

    let claims = authorize(header_value, &jwt_handler).inspect_err(|e| {
        debug!(path = %req.uri().path(), reason = ?e, "Rejected unauthenticated request");
    })?;

    // Add claims to request extensions so handlers can access them
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Identity attached by `auth_middleware`. Rejects with 401 if the gate did not run.
#[derive(Debug, Clone)]
pub struct AuthenticatedAdmin(pub Claims);

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedAdmin
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthenticatedAdmin)
            .ok_or(AuthError::MissingToken)
    }
}

/// Auth error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    MissingToken,
    InvalidFormat,
    InvalidToken,
}

impl AuthError {
    pub fn message(&self) -> &'static str {
        match self {
            AuthError::MissingToken => "Missing authorization token",
            AuthError::InvalidFormat => "Invalid authorization format. Use: Bearer {token}",
            AuthError::InvalidToken => "Invalid or expired token",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": self.message() })),
        )
            .into_response()
    }
}
