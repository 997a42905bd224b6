use fin_core::NewAccount;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    /// Display name (required)
    pub display_name: String,

    /// Optional email; must be unique across accounts when present
    #[serde(default)]
    pub email: Option<String>,

    /// Optional external social identifier
    #[serde(default)]
    pub external_id: Option<String>,
}

impl From<CreateAccountRequest> for NewAccount {
    fn from(req: CreateAccountRequest) -> Self {
        let mut candidate = NewAccount::new(req.display_name);
        candidate.email = req.email;
        candidate.external_id = req.external_id;
        candidate
    }
}
