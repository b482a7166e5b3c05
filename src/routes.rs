//! Router assembly.
//!
//! | Method | Path | Auth |
//! |---|---|---|
//! | POST | `/signup` | none |
//! | POST | `/admin/login` | none |
//! | GET | `/admin/dashboard` | Bearer token |
//! | POST | `/travel-request` | none |
//! | GET | `/get_requests` | Bearer token |
//! | DELETE | `/delete_request/:id` | Bearer token |
//! | GET | `/health` | none |

use crate::auth::{api as auth_api, auth_middleware, AuthState};
use crate::middleware::request_logging;
use crate::travel::{api as travel_api, TravelState};
use axum::{
    middleware,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the full application router.
///
/// Protected routes get the auth gate as a `route_layer`, so it runs before
/// their handlers and unknown paths still 404 instead of 401.
pub fn build_router(auth_state: AuthState, travel_state: TravelState) -> Router {
    let gate = middleware::from_fn_with_state(auth_state.jwt_handler.clone(), auth_middleware);

    let auth_router = Router::new()
        .route("/admin/dashboard", get(auth_api::dashboard))
        .route_layer(gate.clone())
        .route("/signup", post(auth_api::signup))
        .route("/admin/login", post(auth_api::login))
        .with_state(auth_state);

    let travel_router = Router::new()
        .route("/get_requests", get(travel_api::get_requests))
        .route("/delete_request/:id", delete(travel_api::delete_request))
        .route_layer(gate)
        .route("/travel-request", post(travel_api::create_travel_request))
        .with_state(travel_state);

    Router::new()
        .route("/health", get(health_check))
        .merge(auth_router)
        .merge(travel_router)
        .layer(middleware::from_fn(request_logging))
        .layer(CorsLayer::permissive())
}
