use fin_auth::JwtValidator;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state for REST handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// Absent when authentication is disabled by configuration.
    pub jwt_validator: Option<Arc<JwtValidator>>,
}
