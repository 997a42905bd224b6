//! Preferences REST API handlers
//!
//! Preferences are keyed by the caller's own account id; the record is
//! created lazily on first read.

use crate::{ApiError, ApiResult, CallerIdentity, PreferencesResponse};

use crate::app_state::AppState;

use fin_auth::{AccountService, PreferencesService};

use std::panic::Location;

use axum::{Json, extract::State};
use error_location::ErrorLocation;

/// GET /api/preferences
///
/// Return the caller's preference record, creating an empty one on first
/// read.
pub async fn get_preferences(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
) -> ApiResult<Json<PreferencesResponse>> {
    let accounts = AccountService::new(state.pool.clone());

    let Some(account) = accounts.current_user(&caller).await else {
        return Err(ApiError::Unauthorized {
            message: "Authentication required".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    };

    let preferences = PreferencesService::new(state.pool.clone())
        .get(account.id)
        .await?;

    Ok(Json(PreferencesResponse { preferences }))
}
