use crate::AccountOverview;
use serde::Serialize;

/// List of admin account views, ordered by email ascending
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub users: Vec<AccountOverview>,
}
