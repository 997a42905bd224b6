use crate::AccountOverview;
use serde::Serialize;

/// Single admin account view response
#[derive(Debug, Serialize)]
pub struct AccountOverviewResponse {
    pub user: AccountOverview,
}
