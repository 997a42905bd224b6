use crate::ErrorLocation;

use std::fmt;
use std::result::Result as StdResult;

use serde::Serialize;
use thiserror::Error;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation failed: {} {location}", format_field_errors(.errors))]
    Validation {
        errors: Vec<FieldError>,
        location: ErrorLocation,
    },

    #[error("Malformed user identifier: {value:?} {location}")]
    MalformedUserRef {
        value: String,
        location: ErrorLocation,
    },
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(FieldError::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = StdResult<T, CoreError>;
