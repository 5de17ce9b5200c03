//! OpenAPI document served at /docs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

use super::handlers;

/// JWT bearer security scheme referenced by the protected paths
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vestra API",
        description = "Marketplace backend: seller balances, payouts, returns, polls and loyalty",
        version = "0.1.0"
    ),
    paths(
        handlers::health::health_check,
        handlers::auth::register,
        handlers::auth::login,
        handlers::seller::get_balance,
        handlers::seller::request_withdrawal,
        handlers::seller::request_payout,
        handlers::seller::list_withdrawals,
        handlers::seller::set_tracking,
        handlers::returns::respond,
        handlers::polls::get_poll,
        handlers::polls::vote,
        handlers::loyalty::get_loyalty,
        handlers::admin::list_withdrawals,
        handlers::admin::decide_withdrawal,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Auth", description = "Registration and sessions"),
        (name = "Seller", description = "Balance, payouts and order tracking"),
        (name = "Returns", description = "Return request responses"),
        (name = "Polls", description = "Poll reads and voting"),
        (name = "Account", description = "Buyer-side account views"),
        (name = "Admin", description = "Payout review"),
    )
)]
pub struct ApiDoc;
