//! Social sign-in connection attached to an account.

use serde::{Deserialize, Serialize};

/// One provider connection for an account. Connection lifecycle is owned by
/// the sign-in flow; this backend only reads and attaches these records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialConnection {
    pub id: i64,
    pub account_id: i64,
    pub provider: String,
    pub provider_user_id: String,
    pub display_name: Option<String>,
    pub image_url: Option<String>,
    pub profile_url: Option<String>,
}
