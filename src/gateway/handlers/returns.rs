//! Seller response to return requests

use std::sync::Arc;

use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::gateway::state::AppState;
use crate::gateway::types::{ok, ApiError, ApiResult};
use crate::identity::service::Claims;
use crate::returns::{ReturnAction, ReturnError, ReturnService, ReturnStatus};

use super::helpers::require_seller;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RespondBody {
    pub return_request_id: i64,
    pub action: ReturnAction,
    /// Free-text message shown to the customer
    pub response: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RespondResponseData {
    pub status: ReturnStatus,
    pub message: String,
}

/// Approve or reject a pending return request
///
/// POST /api/v1/returns/respond
#[utoipa::path(
    post,
    path = "/api/v1/returns/respond",
    request_body = RespondBody,
    responses(
        (status = 200, description = "Response recorded", body = RespondResponseData),
        (status = 400, description = "Request is no longer pending"),
        (status = 401, description = "No session"),
        (status = 403, description = "Caller is not a seller"),
        (status = 404, description = "Return request not found or not owned")
    ),
    security(("bearer_auth" = [])),
    tag = "Returns"
)]
pub async fn respond(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(body): Json<RespondBody>,
) -> ApiResult<RespondResponseData> {
    // A non-seller caller is a role failure here, not a missing resource
    let seller = require_seller(
        &state,
        &claims,
        ApiError::forbidden("Caller is not a seller"),
    )
    .await?;

    match ReturnService::respond(
        state.db.pool(),
        seller.seller_id,
        body.return_request_id,
        body.action,
        &body.response,
    )
    .await
    {
        Ok(outcome) => ok(RespondResponseData {
            status: outcome.status,
            message: format!("Return request {}", outcome.status),
        }),
        Err(ReturnError::NotFound) => {
            // Not-owned deliberately reads the same as missing
            ApiError::not_found("Return request not found").into_err()
        }
        Err(ReturnError::InvalidStateTransition(s)) => {
            ApiError::invalid_state(format!("Return request is {}", s)).into_err()
        }
        Err(ReturnError::Database(e)) => {
            tracing::error!(
                "Return response failed for request {}: {}",
                body.return_request_id,
                e
            );
            ApiError::internal().into_err()
        }
    }
}
