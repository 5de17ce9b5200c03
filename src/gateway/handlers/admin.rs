//! Admin payout review
//!
//! Role enforcement happens in `admin_auth_middleware`; handlers here only
//! add the step-up PIN for destructive decisions.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::finance::{WithdrawalDecision, WithdrawalRequest, WithdrawalService, WithdrawalStatus};
use crate::gateway::state::AppState;
use crate::gateway::types::{ok, ApiError, ApiResult};
use crate::identity::service::Claims;
use crate::identity::UserRepository;
use crate::security::{PinError, PinGuard};

use super::helpers::parse_user_id;
use super::seller::map_finance_err;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DecisionBody {
    /// "approve", "reject" or "paid"
    pub action: String,
    /// Step-up PIN; failures are rate-limited per admin username
    pub pin: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WithdrawalReviewData {
    pub withdrawals: Vec<WithdrawalRequest>,
}

/// Withdrawal requests awaiting review
///
/// GET /api/v1/admin/withdrawals?status=pending
#[utoipa::path(
    get,
    path = "/api/v1/admin/withdrawals",
    params(
        ("status" = Option<String>, Query, description = "pending (default), approved, rejected or paid")
    ),
    responses(
        (status = 200, description = "Requests in the given status, oldest first", body = WithdrawalReviewData),
        (status = 400, description = "Unknown status"),
        (status = 401, description = "No session"),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_withdrawals(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> ApiResult<WithdrawalReviewData> {
    let status = match query.status.as_deref() {
        None => WithdrawalStatus::Pending,
        Some(s) => WithdrawalStatus::from_str(s)
            .map_err(|_| ApiError::bad_request(format!("Unknown status: {}", s)))?,
    };

    match WithdrawalService::list_by_status(state.db.pool(), status).await {
        Ok(withdrawals) => ok(WithdrawalReviewData { withdrawals }),
        Err(e) => map_finance_err(e).into_err(),
    }
}

/// Apply a decision to a withdrawal request
///
/// POST /api/v1/admin/withdrawals/{id}/decision
#[utoipa::path(
    post,
    path = "/api/v1/admin/withdrawals/{request_id}/decision",
    params(("request_id" = Uuid, Path, description = "Withdrawal request ID")),
    request_body = DecisionBody,
    responses(
        (status = 200, description = "Decision applied", body = WithdrawalRequest),
        (status = 400, description = "Unknown action or illegal status transition"),
        (status = 401, description = "No session"),
        (status = 403, description = "Caller is not an admin, or wrong PIN"),
        (status = 404, description = "Request not found"),
        (status = 429, description = "Too many failed PIN attempts")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn decide_withdrawal(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(request_id): Path<Uuid>,
    Json(body): Json<DecisionBody>,
) -> ApiResult<WithdrawalRequest> {
    let decision = match body.action.as_str() {
        "approve" => WithdrawalDecision::Approve,
        "reject" => WithdrawalDecision::Reject,
        "paid" => WithdrawalDecision::MarkPaid,
        other => {
            return ApiError::bad_request(format!("Unknown action: {}", other)).into_err();
        }
    };

    // Step-up PIN, keyed and rate-limited by the admin's username
    let user_id = parse_user_id(&claims)?;
    let username = UserRepository::get_by_id(state.db.pool(), user_id)
        .await
        .map_err(|e| {
            tracing::error!("Admin lookup failed for user {}: {}", user_id, e);
            ApiError::internal()
        })?
        .ok_or_else(|| ApiError::unauthorized("Unknown user"))?
        .username;

    match PinGuard::verify(
        state.db.pool(),
        &state.security,
        &username,
        &body.pin,
        &state.security.admin_pin,
    )
    .await
    {
        Ok(()) => {}
        Err(PinError::RateLimited) => {
            return ApiError::rate_limited("Too many failed PIN attempts").into_err();
        }
        Err(PinError::InvalidPin) => {
            return ApiError::forbidden("Invalid PIN").into_err();
        }
        Err(PinError::Database(e)) => {
            tracing::error!("PIN check failed for {}: {}", username, e);
            return ApiError::internal().into_err();
        }
    }

    match WithdrawalService::decide(state.db.pool(), request_id, decision).await {
        Ok(request) => ok(request),
        Err(e) => map_finance_err(e).into_err(),
    }
}
