pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::SecurityConfig;
use crate::db::Database;
use crate::identity::middleware::{admin_auth_middleware, jwt_auth_middleware};
use crate::identity::UserAuthService;
use state::AppState;

/// Start HTTP Gateway server
pub async fn run_server(
    host: &str,
    port: u16,
    db: Arc<Database>,
    jwt_secret: String,
    security: SecurityConfig,
) {
    let user_auth = Arc::new(UserAuthService::new(db.pool().clone(), jwt_secret));
    let state = Arc::new(AppState::new(db, user_auth, security));

    // ==========================================================================
    // Auth Routes (no session required)
    // ==========================================================================
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    // ==========================================================================
    // Public Routes
    // ==========================================================================
    let public_routes = Router::new().route("/polls/{poll_id}", get(handlers::polls::get_poll));

    // ==========================================================================
    // Session Routes (JWT required)
    // ==========================================================================
    let session_routes = Router::new()
        // Seller finance
        .route("/seller/balance", get(handlers::seller::get_balance))
        .route(
            "/seller/withdrawal",
            post(handlers::seller::request_withdrawal),
        )
        .route(
            "/seller/request-payout",
            post(handlers::seller::request_payout),
        )
        .route(
            "/seller/withdrawals",
            get(handlers::seller::list_withdrawals),
        )
        .route(
            "/seller/orders/{order_id}/tracking",
            post(handlers::seller::set_tracking),
        )
        // Returns flow
        .route("/returns/respond", post(handlers::returns::respond))
        // Social layer
        .route("/polls/{poll_id}/vote", post(handlers::polls::vote))
        .route("/account/loyalty", get(handlers::loyalty::get_loyalty))
        .layer(from_fn_with_state(state.clone(), jwt_auth_middleware));

    // ==========================================================================
    // Admin Routes (JWT + centralized role check)
    // ==========================================================================
    let admin_routes = Router::new()
        .route("/withdrawals", get(handlers::admin::list_withdrawals))
        .route(
            "/withdrawals/{request_id}/decision",
            post(handlers::admin::decide_withdrawal),
        )
        .layer(from_fn_with_state(state.clone(), admin_auth_middleware))
        .layer(from_fn_with_state(state.clone(), jwt_auth_middleware));

    // Build complete router; the session layer is already baked into its
    // half, so merging keeps the public poll read unauthenticated.
    let app = Router::new()
        .route("/api/v1/health", get(handlers::health::health_check))
        .nest("/api/v1/auth", auth_routes)
        .nest("/api/v1", public_routes.merge(session_routes))
        .nest("/api/v1/admin", admin_routes)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()));

    // Bind address
    let addr = format!("{}:{}", host, port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("FATAL: Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Gateway listening on http://{}", addr);
    tracing::info!("API Docs: http://{}/docs", addr);

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("FATAL: Server error: {}", e);
        std::process::exit(1);
    }
}
