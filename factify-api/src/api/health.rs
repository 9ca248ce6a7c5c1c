//! Health check endpoint

use axum::{extract::State, routing::get, Json, Router};
use factify_common::time;
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "healthy" while the process can answer
    pub status: String,
    pub message: String,
    pub version: String,
    /// Seconds since service started
    pub uptime_seconds: u64,
}

/// GET /health
///
/// Liveness only; no provider is contacted.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: format!("{} is running", state.settings.app_name),
        version: state.settings.version.clone(),
        uptime_seconds: time::seconds_since(state.startup_time),
    })
}

/// Build health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
