//! Liveness endpoints

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct Pong {
    message: String,
}

#[derive(Serialize, ToSchema)]
pub struct HealthCheck {
    status: String,
    message: String,
    version: String,
    backend: String,
}

/// Ping
#[utoipa::path(
    get,
    path = "/ping",
    responses((status = 200, description = "Server is up", body = Pong)),
    tag = "Health"
)]
pub async fn ping() -> Json<Pong> {
    Json(Pong {
        message: "pong".to_string(),
    })
}

/// Health check with version and active storage backend
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Server is healthy", body = HealthCheck)),
    tag = "Health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Chirp API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        backend: state.backend.to_string(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ping", get(ping))
        .route("/health", get(health_check))
}
