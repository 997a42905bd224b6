use crate::app_state::AppState;
use crate::health;
use crate::{
    create_account, get_preferences, grant_role, list_users, lock_user, me, revoke_role,
    trust_user, unlock_user, untrust_user,
};

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Account endpoints
        .route("/api/users", post(create_account))
        .route("/api/users/me", get(me))
        .route("/api/preferences", get(get_preferences))
        // Admin endpoints. grant/revoke are GET because the legacy admin
        // console calls them as reads; the verb is part of the contract.
        .route("/api/admin/users", get(list_users))
        .route("/api/admin/users/{id}/lock", put(lock_user))
        .route("/api/admin/users/{id}/unlock", put(unlock_user))
        .route("/api/admin/users/{id}/trust", put(trust_user))
        .route("/api/admin/users/{id}/untrust", put(untrust_user))
        .route("/api/admin/users/{id}/grant/{role}", get(grant_role))
        .route("/api/admin/users/{id}/revoke/{role}", get(revoke_role))
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
