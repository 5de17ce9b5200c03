//! Shared handler plumbing: caller resolution

use crate::gateway::state::AppState;
use crate::gateway::types::{ApiError, ApiRejection};
use crate::identity::repository::SellerRepository;
use crate::identity::service::Claims;
use crate::identity::Seller;

/// Extract the numeric user ID from verified session claims
pub fn parse_user_id(claims: &Claims) -> Result<i64, ApiRejection> {
    claims
        .sub
        .parse::<i64>()
        .map_err(|_| ApiError::unauthorized("Invalid user ID in token").into())
}

/// Resolve the caller's seller profile
///
/// `missing` decides how a caller without a profile is reported: seller
/// endpoints answer 404, the returns flow answers 403.
pub async fn require_seller(
    state: &AppState,
    claims: &Claims,
    missing: ApiError,
) -> Result<Seller, ApiRejection> {
    let user_id = parse_user_id(claims)?;

    SellerRepository::get_by_user_id(state.db.pool(), user_id)
        .await
        .map_err(|e| {
            tracing::error!("Seller lookup failed for user {}: {}", user_id, e);
            ApiRejection::from(ApiError::internal())
        })?
        .ok_or_else(|| missing.into())
}
