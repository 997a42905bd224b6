//! Composite account identifier used at the boundary.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Addresses an account as `"user:<numeric-id>"`. Exactly two `:`-separated
/// tokens, the first the literal `user`, the second a decimal integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRef(pub i64);

const PREFIX: &str = "user";

impl UserRef {
    pub fn id(&self) -> i64 {
        self.0
    }
}

impl FromStr for UserRef {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        let mut tokens = s.split(':');
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(PREFIX), Some(id), None) => match id.parse::<i64>() {
                Ok(id) => Ok(Self(id)),
                Err(_) => Err(CoreError::MalformedUserRef {
                    value: s.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }),
            },
            _ => Err(CoreError::MalformedUserRef {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for UserRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", PREFIX, self.0)
    }
}
