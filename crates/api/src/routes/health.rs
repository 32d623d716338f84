use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Status check response payload.
#[derive(Serialize)]
pub struct StatusResponse {
    /// `"OK"`, or `"degraded"` when storage does not answer.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Configured storage backend.
    pub storage: &'static str,
    /// Whether the storage backend is reachable.
    pub storage_healthy: bool,
}

/// GET /status -- returns service and storage health.
async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let storage_healthy = state.storage.health_check().await.is_ok();

    let status = if storage_healthy { "OK" } else { "degraded" };

    Json(StatusResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        storage: state.storage.backend_name(),
        storage_healthy,
    })
}

/// Mount the status route (under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/status", get(status))
}
