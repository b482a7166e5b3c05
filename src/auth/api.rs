//! Authentication API Endpoints
//! Mission: Admin signup, login and dashboard

use crate::auth::{
    admin_store::AdminStore,
    jwt::JwtHandler,
    middleware::AuthenticatedAdmin,
    models::{Credentials, DashboardResponse, LoginResponse, SignupResponse},
    password::{hash_password_blocking, verify_password_blocking},
};
use crate::error::ApiError;
use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use tracing::{info, warn};

/// Shared auth state
#[derive(Clone)]
pub struct AuthState {
    pub admin_store: Arc<AdminStore>,
    pub jwt_handler: Arc<JwtHandler>,
}

impl AuthState {
    pub fn new(admin_store: Arc<AdminStore>, jwt_handler: Arc<JwtHandler>) -> Self {
        Self {
            admin_store,
            jwt_handler,
        }
    }
}

fn validate_credentials(creds: &Credentials) -> Result<(), ApiError> {
    if creds.username.trim().is_empty() {
        return Err(ApiError::Validation("Username is required".to_string()));
    }
    if creds.password.is_empty() {
        return Err(ApiError::Validation("Password is required".to_string()));
    }
    Ok(())
}

/// Signup endpoint - POST /signup
///
/// Does not log the new admin in; a separate login is required.
pub async fn signup(
    State(state): State<AuthState>,
    Json(payload): Json<Credentials>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    validate_credentials(&payload)?;

    let Credentials { username, password } = payload;
    let password_hash = hash_password_blocking(password).await?;

    let admin = state
        .admin_store
        .insert(&username, password_hash)
        .inspect_err(|e| warn!("Signup for {} refused: {}", username, e))?;

    info!("Admin signed up: {} ({})", admin.username, admin.id);

    Ok((StatusCode::CREATED, Json(SignupResponse::from_admin(&admin))))
}

/// Login endpoint - POST /admin/login
///
/// Unknown usernames and wrong passwords produce the same response.
pub async fn login(
    State(state): State<AuthState>,
    Json(payload): Json<Credentials>,
) -> Result<Json<LoginResponse>, ApiError> {
    info!("Login attempt: {}", payload.username);

    let admin = state.admin_store.find_by_username(&payload.username)?;

    let stored_hash = admin.as_ref().map(|a| a.password_hash.clone());
    let valid = verify_password_blocking(payload.password, stored_hash).await?;

    let admin = match admin {
        Some(admin) if valid => admin,
        _ => {
            warn!("Failed login attempt: {}", payload.username);
            return Err(ApiError::Authentication);
        }
    };

    let (token, expires_in) = state.jwt_handler.generate_token(&admin)?;

    info!("Login successful: {} ({})", admin.username, admin.id);

    Ok(Json(LoginResponse { token, expires_in }))
}

/// Dashboard endpoint - GET /admin/dashboard (behind the auth gate)
pub async fn dashboard(
    State(state): State<AuthState>,
    AuthenticatedAdmin(claims): AuthenticatedAdmin,
) -> Result<Json<DashboardResponse>, ApiError> {
    let admin_id = claims.admin_id().ok_or(ApiError::Authentication)?;

    // A valid signature for an admin that no longer exists is still a failed login
    let admin = state
        .admin_store
        .find_by_id(&admin_id)?
        .ok_or(ApiError::Authentication)?;

    Ok(Json(DashboardResponse {
        id: admin.id.to_string(),
        message: format!("Welcome, {}", admin.username),
        username: admin.username,
    }))
}
