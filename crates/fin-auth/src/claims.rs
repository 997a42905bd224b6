use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// JWT claims carried by bearer tokens at the REST boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (principal name)
    pub sub: String,
    /// Email, when the identity provider includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.sub.len() > 254 {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub exceeds maximum length".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if let Some(email) = &self.email {
            if email.is_empty() {
                return Err(AuthError::InvalidClaim {
                    claim: "email".to_string(),
                    message: "email cannot be empty when present".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        Ok(())
    }

    /// The principal name used for current-user resolution. The email claim
    /// wins when present; the subject is treated as an email otherwise,
    /// matching how the original authentication flow names principals.
    pub fn principal_name(&self) -> &str {
        self.email.as_deref().unwrap_or(&self.sub)
    }
}
