use crate::AccountDto;
use serde::Serialize;

/// Current-user response. `account` is null for anonymous callers; absence
/// of a session is a normal state, not an error.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub account: Option<AccountDto>,
}
