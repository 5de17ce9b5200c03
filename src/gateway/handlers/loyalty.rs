//! Loyalty tier for the calling buyer

use std::sync::Arc;

use axum::{extract::State, Extension};

use crate::gateway::state::AppState;
use crate::gateway::types::{ok, ApiError, ApiResult};
use crate::identity::service::Claims;
use crate::loyalty::{self, LoyaltyStatus};
use crate::orders::OrderRepository;

use super::helpers::parse_user_id;

/// Current tier and distance to the next one
///
/// GET /api/v1/account/loyalty
#[utoipa::path(
    get,
    path = "/api/v1/account/loyalty",
    responses(
        (status = 200, description = "Tier over lifetime paid spend", body = LoyaltyStatus),
        (status = 401, description = "No session")
    ),
    security(("bearer_auth" = [])),
    tag = "Account"
)]
pub async fn get_loyalty(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<LoyaltyStatus> {
    let user_id = parse_user_id(&claims)?;

    match OrderRepository::total_spend(state.db.pool(), user_id).await {
        Ok(total) => ok(loyalty::tier_for(total)),
        Err(e) => {
            tracing::error!("Spend query failed for user {}: {}", user_id, e);
            ApiError::internal().into_err()
        }
    }
}
