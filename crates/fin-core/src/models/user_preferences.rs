//! Per-account preference record, lazily created on first read.

use serde::{Deserialize, Serialize};

/// At most one record exists per account; `group_id` is the owning account's
/// id (the boundary calls it "groupId"). The payload is an opaque JSON
/// document owned by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub group_id: i64,
    pub payload: serde_json::Value,
}

impl UserPreferences {
    /// An empty preference record for the given account.
    pub fn empty(group_id: i64) -> Self {
        Self {
            group_id,
            payload: serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}
