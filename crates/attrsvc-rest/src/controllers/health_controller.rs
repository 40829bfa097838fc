//! Health check controller.

use crate::state::HealthState;
use attrsvc_core::{ErrorResponse, HealthStatus};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Health status.
    pub status: String,
    /// Service name.
    pub service: String,
    /// Application version.
    pub version: String,
}

/// Creates the health router.
pub fn router(state: HealthState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Health check endpoint.
pub async fn health_check(State(state): State<HealthState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: state.service.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness check endpoint. Ready once the store answers a trivial query.
pub async fn readiness_check(State(state): State<HealthState>) -> Response {
    match state.readiness.check().await {
        HealthStatus::Healthy => StatusCode::OK.into_response(),
        HealthStatus::Unhealthy(reason) => {
            warn!(check = state.readiness.name(), reason = %reason, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse { error: reason }),
            )
                .into_response()
        }
    }
}
