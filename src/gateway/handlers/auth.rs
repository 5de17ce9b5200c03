//! Registration and login

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::gateway::state::AppState;
use crate::gateway::types::{ok, ApiError, ApiResult};
use crate::identity::service::{AuthResponse, LoginRequest, RegisterRequest};

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponseData {
    pub user_id: i64,
}

/// Register a new user
///
/// POST /api/v1/auth/register
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User created", body = RegisterResponseData),
        (status = 400, description = "Invalid payload or duplicate username/email")
    ),
    tag = "Auth"
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<RegisterResponseData> {
    match state.user_auth.register(req).await {
        Ok(user_id) => ok(RegisterResponseData { user_id }),
        Err(e) => ApiError::bad_request(e.to_string()).into_err(),
    }
}

/// Login and receive a session token
///
/// POST /api/v1/auth/login
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session token", body = AuthResponse),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<AuthResponse> {
    match state.user_auth.login(req).await {
        Ok(resp) => ok(resp),
        Err(e) => ApiError::unauthorized(e.to_string()).into_err(),
    }
}
