//! Structural validation for account candidates.

use crate::{CoreError, FieldError, NewAccount, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

const MAX_DISPLAY_NAME: usize = 120;
const MAX_EMAIL: usize = 254;
const MAX_EXTERNAL_ID: usize = 128;
const MAX_ROLE: usize = 64;

/// Validates account candidates before they reach the store.
pub struct AccountValidator;

impl AccountValidator {
    /// Check required fields and formats, collecting every failure so the
    /// caller gets the full field/message list in one round trip.
    #[track_caller]
    pub fn validate(candidate: &NewAccount) -> CoreErrorResult<()> {
        let mut errors = Vec::new();

        if candidate.display_name.trim().is_empty() {
            errors.push(FieldError::new("display_name", "must not be empty"));
        } else if candidate.display_name.len() > MAX_DISPLAY_NAME {
            errors.push(FieldError::new(
                "display_name",
                format!("must not exceed {} characters", MAX_DISPLAY_NAME),
            ));
        }

        if let Some(email) = &candidate.email {
            if email.len() > MAX_EMAIL {
                errors.push(FieldError::new(
                    "email",
                    format!("must not exceed {} characters", MAX_EMAIL),
                ));
            } else if !is_email_shaped(email) {
                errors.push(FieldError::new("email", "must be a valid email address"));
            }
        }

        if let Some(external_id) = &candidate.external_id {
            if external_id.is_empty() {
                errors.push(FieldError::new("external_id", "must not be empty"));
            } else if external_id.len() > MAX_EXTERNAL_ID {
                errors.push(FieldError::new(
                    "external_id",
                    format!("must not exceed {} characters", MAX_EXTERNAL_ID),
                ));
            }
        }

        for role in &candidate.roles {
            if role.is_empty() || role.len() > MAX_ROLE {
                errors.push(FieldError::new(
                    "roles",
                    format!("invalid role token: {:?}", role),
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation {
                errors,
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }

    /// Validate a single role token, used by the grant operation.
    #[track_caller]
    pub fn validate_role(role: &str) -> CoreErrorResult<()> {
        if role.is_empty() || role.len() > MAX_ROLE {
            return Err(CoreError::Validation {
                errors: vec![FieldError::new(
                    "role",
                    format!("invalid role token: {:?}", role),
                )],
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}

/// Minimal shape check: one `@` with a non-empty local part and a dotted
/// domain. Deliverability is not this layer's problem.
fn is_email_shaped(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace)
}
