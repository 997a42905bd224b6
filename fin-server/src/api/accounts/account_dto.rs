use fin_core::Account;

use serde::Serialize;

/// Account DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct AccountDto {
    pub id: i64,
    /// Composite identifier, e.g. "user:42"
    pub user_ref: String,
    pub email: Option<String>,
    pub display_name: String,
    pub external_id: Option<String>,
    /// Sorted role tokens
    pub roles: Vec<String>,
    pub locked: bool,
    pub trusted: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Account> for AccountDto {
    fn from(a: Account) -> Self {
        Self {
            id: a.id,
            user_ref: a.user_ref().to_string(),
            email: a.email,
            display_name: a.display_name,
            external_id: a.external_id,
            roles: a.roles.into_iter().collect(),
            locked: a.locked,
            trusted: a.trusted,
            created_at: a.created_at.timestamp(),
            updated_at: a.updated_at.timestamp(),
        }
    }
}
