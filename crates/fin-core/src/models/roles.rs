//! Role tokens held by accounts.

use std::collections::BTreeSet;

/// Granted to every account at creation.
pub const ROLE_USER: &str = "ROLE_USER";

/// Required for the account admin endpoints.
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";

/// The role set assigned to new accounts.
pub fn default_roles() -> BTreeSet<String> {
    BTreeSet::from([ROLE_USER.to_string()])
}
