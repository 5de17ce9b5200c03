use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::Response,
    Json,
};
use std::sync::Arc;

use crate::gateway::{
    state::AppState,
    types::{error_codes, ApiResponse},
};
use crate::identity::repository::UserRepository;
use crate::identity::service::Claims;

type Rejection = (StatusCode, Json<ApiResponse<()>>);

fn reject(status: StatusCode, code: i32, msg: &str) -> Rejection {
    (status, Json(ApiResponse::<()>::error(code, msg)))
}

/// Verify the bearer token and inject [`Claims`] for downstream handlers
pub async fn jwt_auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, Rejection> {
    // 1. Extract Authorization header
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            reject(
                StatusCode::UNAUTHORIZED,
                error_codes::MISSING_AUTH,
                "Missing Authorization header",
            )
        })?;

    if !auth_header.starts_with("Bearer ") {
        return Err(reject(
            StatusCode::UNAUTHORIZED,
            error_codes::AUTH_FAILED,
            "Invalid token format",
        ));
    }

    let token = &auth_header[7..];

    // 2. Verify token and inject claims
    match state.user_auth.verify_token(token) {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            Ok(next.run(request).await)
        }
        Err(_) => Err(reject(
            StatusCode::UNAUTHORIZED,
            error_codes::AUTH_FAILED,
            "Invalid or expired token",
        )),
    }
}

/// Centralized admin capability check
///
/// Runs after [`jwt_auth_middleware`]: resolves the caller's role from the
/// store and rejects non-admins. Handlers behind this layer never repeat
/// their own identity checks.
pub async fn admin_auth_middleware(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, Rejection> {
    let claims = request.extensions().get::<Claims>().ok_or_else(|| {
        reject(
            StatusCode::UNAUTHORIZED,
            error_codes::MISSING_AUTH,
            "Missing session",
        )
    })?;

    let user_id: i64 = claims.sub.parse().map_err(|_| {
        reject(
            StatusCode::UNAUTHORIZED,
            error_codes::AUTH_FAILED,
            "Invalid user ID in token",
        )
    })?;

    let user = UserRepository::get_by_id(state.db.pool(), user_id)
        .await
        .map_err(|e| {
            tracing::error!("Role lookup failed for user {}: {}", user_id, e);
            reject(
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::INTERNAL_ERROR,
                "Internal error",
            )
        })?
        .ok_or_else(|| {
            reject(
                StatusCode::UNAUTHORIZED,
                error_codes::AUTH_FAILED,
                "Unknown user",
            )
        })?;

    if !user.is_admin() {
        return Err(reject(
            StatusCode::FORBIDDEN,
            error_codes::FORBIDDEN,
            "Admin role required",
        ));
    }

    Ok(next.run(request).await)
}
