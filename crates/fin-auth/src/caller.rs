//! Caller identity, resolved by the boundary layer and passed explicitly.

use fin_core::Account;

/// Who is making the current call. The boundary resolves credentials into
/// one of these before any service code runs; services never consult
/// ambient state.
#[derive(Debug, Clone)]
pub enum Caller {
    /// Principal already resolved to a full account.
    Account(Account),
    /// Authenticated principal name, treated as an email.
    Name(String),
    /// No authenticated context. A normal state, not a fault.
    Anonymous,
}

impl Caller {
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }

    /// The principal name, when one is known.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Account(account) => account.email.as_deref(),
            Self::Name(name) => Some(name),
            Self::Anonymous => None,
        }
    }
}
