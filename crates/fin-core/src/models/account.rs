//! Account entity - one registered user.

use crate::UserRef;

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user account. The id is assigned by the store at creation
/// and never changes; the email, when present, is unique across accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub email: Option<String>,
    pub display_name: String,
    /// External social identifier (e.g. a Google subject id)
    pub external_id: Option<String>,
    pub roles: BTreeSet<String>,
    pub locked: bool,
    pub trusted: bool,
    /// Optimistic locking version
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// The composite identifier this account is addressed by at the boundary.
    pub fn user_ref(&self) -> UserRef {
        UserRef(self.id)
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(crate::ROLE_ADMIN)
    }
}
