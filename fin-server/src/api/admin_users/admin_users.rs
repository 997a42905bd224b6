//! Account admin REST API handlers
//!
//! Every operation addresses a single account by composite `"user:<id>"`
//! identifier (except the listing) and returns the account view paired with
//! its social connections. All mutation logic is delegated to the account
//! service; the handlers only resolve the caller, dispatch, and assemble the
//! view.

use crate::{
    AccountOverview, AccountOverviewResponse, ApiError, ApiResult, CallerIdentity,
    UserListResponse,
};

use crate::app_state::AppState;

use fin_auth::{AccountService, Caller};
use fin_core::Account;
use fin_db::SocialConnectionRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
};
use error_location::ErrorLocation;

/// Resolve the caller and require the administrator role.
async fn require_admin(state: &AppState, caller: &Caller) -> ApiResult<Account> {
    let service = AccountService::new(state.pool.clone());

    let Some(current) = service.current_user(caller).await else {
        return Err(ApiError::Unauthorized {
            message: "Authentication required".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    };

    if !current.is_admin() {
        return Err(ApiError::Forbidden {
            message: "Administrator role required".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(current)
}

/// Pair an account with its social connections.
async fn overview(state: &AppState, account: Account) -> ApiResult<AccountOverview> {
    let connections = SocialConnectionRepository::new(state.pool.clone())
        .find_by_account(account.id)
        .await?;

    Ok(AccountOverview::new(account, connections))
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/admin/users
///
/// List all accounts ordered by email ascending, each with its connections.
pub async fn list_users(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
) -> ApiResult<Json<UserListResponse>> {
    require_admin(&state, &caller).await?;

    let service = AccountService::new(state.pool.clone());
    let accounts = service.list_accounts().await?;

    let mut users = Vec::with_capacity(accounts.len());
    for account in accounts {
        users.push(overview(&state, account).await?);
    }

    Ok(Json(UserListResponse { users }))
}

/// PUT /api/admin/users/{id}/lock
pub async fn lock_user(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path(id): Path<String>,
) -> ApiResult<Json<AccountOverviewResponse>> {
    require_admin(&state, &caller).await?;

    let account = AccountService::new(state.pool.clone())
        .set_locked(&id, true)
        .await?;

    Ok(Json(AccountOverviewResponse {
        user: overview(&state, account).await?,
    }))
}

/// PUT /api/admin/users/{id}/unlock
pub async fn unlock_user(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path(id): Path<String>,
) -> ApiResult<Json<AccountOverviewResponse>> {
    require_admin(&state, &caller).await?;

    let account = AccountService::new(state.pool.clone())
        .set_locked(&id, false)
        .await?;

    Ok(Json(AccountOverviewResponse {
        user: overview(&state, account).await?,
    }))
}

/// PUT /api/admin/users/{id}/trust
pub async fn trust_user(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path(id): Path<String>,
) -> ApiResult<Json<AccountOverviewResponse>> {
    require_admin(&state, &caller).await?;

    let account = AccountService::new(state.pool.clone())
        .set_trusted(&id, true)
        .await?;

    Ok(Json(AccountOverviewResponse {
        user: overview(&state, account).await?,
    }))
}

/// PUT /api/admin/users/{id}/untrust
pub async fn untrust_user(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path(id): Path<String>,
) -> ApiResult<Json<AccountOverviewResponse>> {
    require_admin(&state, &caller).await?;

    let account = AccountService::new(state.pool.clone())
        .set_trusted(&id, false)
        .await?;

    Ok(Json(AccountOverviewResponse {
        user: overview(&state, account).await?,
    }))
}

/// GET /api/admin/users/{id}/grant/{role}
pub async fn grant_role(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path((id, role)): Path<(String, String)>,
) -> ApiResult<Json<AccountOverviewResponse>> {
    require_admin(&state, &caller).await?;

    let account = AccountService::new(state.pool.clone())
        .grant(&id, &role)
        .await?;

    Ok(Json(AccountOverviewResponse {
        user: overview(&state, account).await?,
    }))
}

/// GET /api/admin/users/{id}/revoke/{role}
pub async fn revoke_role(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path((id, role)): Path<(String, String)>,
) -> ApiResult<Json<AccountOverviewResponse>> {
    require_admin(&state, &caller).await?;

    let account = AccountService::new(state.pool.clone())
        .revoke(&id, &role)
        .await?;

    Ok(Json(AccountOverviewResponse {
        user: overview(&state, account).await?,
    }))
}
