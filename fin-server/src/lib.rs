pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    accounts::{
        account_dto::AccountDto,
        account_response::AccountResponse,
        accounts::{create_account, me},
        create_account_request::CreateAccountRequest,
        me_response::MeResponse,
    },
    admin_users::{
        account_overview::AccountOverview,
        account_overview_response::AccountOverviewResponse,
        admin_users::{
            grant_role, list_users, lock_user, revoke_role, trust_user, unlock_user, untrust_user,
        },
        social_connection_dto::SocialConnectionDto,
        user_list_response::UserListResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::caller_identity::CallerIdentity,
    preferences::{preferences::get_preferences, preferences_response::PreferencesResponse},
};

pub use crate::app_state::AppState;
pub use crate::config::Config;
pub use crate::error::{Result as ServerErrorResult, ServerError};
pub use crate::routes::build_router;
