//! Health check

use std::sync::Arc;

use axum::extract::State;
use serde::Serialize;
use utoipa::ToSchema;

use crate::gateway::state::AppState;
use crate::gateway::types::{ok, ApiError, ApiResult};

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthData {
    pub status: &'static str,
}

/// GET /api/v1/health
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthData),
        (status = 503, description = "Database unreachable")
    ),
    tag = "Health"
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> ApiResult<HealthData> {
    match state.db.health_check().await {
        Ok(()) => ok(HealthData { status: "ok" }),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            ApiError::service_unavailable("Database unreachable").into_err()
        }
    }
}
