//! Account REST API handlers
//!
//! Registration and current-user resolution.

use crate::{
    AccountDto, AccountResponse, ApiResult, CallerIdentity, CreateAccountRequest, MeResponse,
};

use crate::app_state::AppState;

use fin_auth::AccountService;

use axum::{Json, extract::State};

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/users
///
/// Register a new account. The service assigns the default role set,
/// validates the candidate, and rejects duplicate emails before writing.
pub async fn create_account(
    State(state): State<AppState>,
    Json(req): Json<CreateAccountRequest>,
) -> ApiResult<Json<AccountResponse>> {
    let service = AccountService::new(state.pool.clone());
    let account = service.create_account(req.into()).await?;

    Ok(Json(AccountResponse {
        account: AccountDto::from(account),
    }))
}

/// GET /api/users/me
///
/// Resolve the calling identity to an account. Anonymous callers get
/// `{"account": null}` rather than an error.
pub async fn me(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
) -> ApiResult<Json<MeResponse>> {
    let service = AccountService::new(state.pool.clone());
    let current = service.current_user(&caller).await;

    Ok(Json(MeResponse {
        account: current.map(AccountDto::from),
    }))
}
