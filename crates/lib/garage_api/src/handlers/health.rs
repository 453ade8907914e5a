//! Health endpoint.

use axum::Json;
use axum::extract::State;
use tracing::warn;

use crate::AppState;
use crate::models::HealthResponse;

/// `GET /health` — version and store connectivity.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_healthy = match state.store.health_check().await {
        Ok(()) => true,
        Err(e) => {
            warn!("store health check failed: {e}");
            false
        }
    };

    Json(HealthResponse {
        status: if store_healthy { "ok" } else { "degraded" }.to_string(),
        version: garage_core::version().to_string(),
        store_backend: state.store.backend_name().to_string(),
        store_healthy,
    })
}
