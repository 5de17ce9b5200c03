use std::sync::Arc;

use crate::config::SecurityConfig;
use crate::db::Database;
use crate::identity::UserAuthService;

/// Shared gateway state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL database
    pub db: Arc<Database>,
    /// Session token service
    pub user_auth: Arc<UserAuthService>,
    /// Step-up PIN policy
    pub security: SecurityConfig,
}

impl AppState {
    pub fn new(
        db: Arc<Database>,
        user_auth: Arc<UserAuthService>,
        security: SecurityConfig,
    ) -> Self {
        Self {
            db,
            user_auth,
            security,
        }
    }
}
