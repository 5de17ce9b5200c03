//! Poll voting and results

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::gateway::state::AppState;
use crate::gateway::types::{error_codes, ok, ApiError, ApiResult};
use crate::identity::service::Claims;
use crate::polls::{Poll, PollError, PollService};

use super::helpers::parse_user_id;

#[derive(Debug, Deserialize, ToSchema)]
pub struct VoteBody {
    pub option_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VoteResponseData {
    pub poll_id: i64,
    pub option_id: i64,
}

/// Poll with options and current counts
///
/// GET /api/v1/polls/{poll_id}
#[utoipa::path(
    get,
    path = "/api/v1/polls/{poll_id}",
    params(("poll_id" = i64, Path, description = "Poll ID")),
    responses(
        (status = 200, description = "Poll with options and counts", body = Poll),
        (status = 404, description = "Poll not found")
    ),
    tag = "Polls"
)]
pub async fn get_poll(
    State(state): State<Arc<AppState>>,
    Path(poll_id): Path<i64>,
) -> ApiResult<Poll> {
    match PollService::get(state.db.pool(), poll_id).await {
        Ok(poll) => ok(poll),
        Err(e) => map_poll_err(poll_id, e).into_err(),
    }
}

/// Cast a vote; each user gets one per poll
///
/// POST /api/v1/polls/{poll_id}/vote
#[utoipa::path(
    post,
    path = "/api/v1/polls/{poll_id}/vote",
    params(("poll_id" = i64, Path, description = "Poll ID")),
    request_body = VoteBody,
    responses(
        (status = 200, description = "Vote recorded", body = VoteResponseData),
        (status = 400, description = "Poll closed, foreign option, or already voted"),
        (status = 401, description = "No session"),
        (status = 404, description = "Poll not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Polls"
)]
pub async fn vote(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(poll_id): Path<i64>,
    Json(body): Json<VoteBody>,
) -> ApiResult<VoteResponseData> {
    let user_id = parse_user_id(&claims)?;

    match PollService::vote(state.db.pool(), poll_id, body.option_id, user_id).await {
        Ok(()) => ok(VoteResponseData {
            poll_id,
            option_id: body.option_id,
        }),
        Err(e) => map_poll_err(poll_id, e).into_err(),
    }
}

fn map_poll_err(poll_id: i64, e: PollError) -> ApiError {
    match e {
        PollError::NotFound => ApiError::not_found("Poll not found"),
        PollError::UnknownOption => ApiError::bad_request("Option does not belong to this poll"),
        PollError::Closed => ApiError::invalid_state("Poll is closed"),
        PollError::AlreadyVoted => ApiError::new(
            axum::http::StatusCode::BAD_REQUEST,
            error_codes::ALREADY_VOTED,
            "Already voted in this poll",
        ),
        PollError::Database(e) => {
            tracing::error!("Poll store failure for poll {}: {}", poll_id, e);
            ApiError::internal()
        }
    }
}
