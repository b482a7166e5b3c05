//! Travel Request API Endpoints
//! Mission: Public intake of travel requests, admin-only listing and deletion

use crate::auth::middleware::AuthenticatedAdmin;
use crate::error::ApiError;
use crate::models::{NewTravelRequest, TravelRequest};
use crate::travel::store::TravelRequestStore;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Shared travel request state
#[derive(Clone)]
pub struct TravelState {
    pub store: Arc<TravelRequestStore>,
}

impl TravelState {
    pub fn new(store: Arc<TravelRequestStore>) -> Self {
        Self { store }
    }
}

/// POST /travel-request (public)
///
/// Fields are stored as given; there is no validation of email or cost.
pub async fn create_travel_request(
    State(state): State<TravelState>,
    Json(payload): Json<NewTravelRequest>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let saved = state.store.insert(payload)?;
    debug!("Travel request {} accepted", saved.id);

    Ok((StatusCode::OK, "Travel request saved successfully"))
}

/// GET /get_requests (admin)
pub async fn get_requests(
    State(state): State<TravelState>,
    AuthenticatedAdmin(claims): AuthenticatedAdmin,
) -> Result<Json<Vec<TravelRequest>>, ApiError> {
    let requests = state.store.find_all()?;
    debug!(
        "Admin {} listed {} travel requests",
        claims.username,
        requests.len()
    );
    Ok(Json(requests))
}

/// DELETE /delete_request/:id (admin)
pub async fn delete_request(
    State(state): State<TravelState>,
    AuthenticatedAdmin(claims): AuthenticatedAdmin,
    Path(id): Path<String>,
) -> Result<Json<TravelRequest>, ApiError> {
    let deleted = state
        .store
        .delete_by_id(&id)?
        .ok_or_else(|| ApiError::NotFound("Travel request not found".to_string()))?;

    info!("Admin {} deleted travel request {}", claims.username, id);
    Ok(Json(deleted))
}
