//! Creation candidate for an account, before the store assigns an id.

use crate::models::roles::default_roles;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// An account candidate. Roles start empty; the service assigns the default
/// set before validation and persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccount {
    pub email: Option<String>,
    pub display_name: String,
    pub external_id: Option<String>,
    #[serde(default)]
    pub roles: BTreeSet<String>,
}

impl NewAccount {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            email: None,
            display_name: display_name.into(),
            external_id: None,
            roles: BTreeSet::new(),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }

    /// Replace the role set with the default profile for new users.
    pub fn assign_default_roles(&mut self) {
        self.roles = default_roles();
    }
}
