use fin_core::{CoreError, ErrorLocation, FieldError};
use fin_db::DbError;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Validation failed ({} field error(s)) {location}", .errors.len())]
    Validation {
        errors: Vec<FieldError>,
        location: ErrorLocation,
    },

    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Business rule violated: {message} {location}")]
    BusinessRule {
        message: String,
        location: ErrorLocation,
    },

    #[error("Malformed user identifier: {value:?} {location}")]
    MalformedUserRef {
        value: String,
        location: ErrorLocation,
    },

    #[error("Conflict: {message} (current version: {current_version}) {location}")]
    Conflict {
        message: String,
        current_version: i32,
        location: ErrorLocation,
    },

    #[error("Store error: {source} {location}")]
    Db {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },
}

impl From<CoreError> for AuthError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { errors, .. } => Self::Validation {
                errors,
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::MalformedUserRef { value, .. } => Self::MalformedUserRef {
                value,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<DbError> for AuthError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Db {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
