//! Axum extractor that resolves the request's credentials into a [`Caller`].
//!
//! Services never consult ambient authentication state; every handler
//! receives the caller identity this extractor produced.

use crate::api::error::ApiError;
use crate::app_state::AppState;

use fin_auth::Caller;

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};
use error_location::ErrorLocation;

/// The resolved caller identity.
///
/// A missing `Authorization` header is an anonymous caller, not an error;
/// a present but unusable bearer token is rejected with 401. When
/// authentication is disabled by configuration, a development `X-User-Email`
/// header may name the caller.
pub struct CallerIdentity(pub Caller);

impl FromRequestParts<AppState> for CallerIdentity {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let headers = &parts.headers;

            if let Some(header_value) = headers.get(AUTHORIZATION) {
                let value = header_value.to_str().map_err(|_| ApiError::Unauthorized {
                    message: "Authorization header is not valid UTF-8".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })?;

                let Some(token) = value.strip_prefix("Bearer ") else {
                    return Err(ApiError::Unauthorized {
                        message: "Authorization scheme must be 'Bearer'".to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    });
                };

                let Some(validator) = &state.jwt_validator else {
                    return Err(ApiError::Unauthorized {
                        message: "Bearer authentication is disabled on this server".to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    });
                };

                let claims = validator.validate(token)?;
                log::debug!("Authenticated caller '{}'", claims.principal_name());
                return Ok(CallerIdentity(Caller::Name(
                    claims.principal_name().to_string(),
                )));
            }

            // Development fallback when authentication is disabled
            if state.jwt_validator.is_none() {
                if let Some(email) = headers.get("X-User-Email").and_then(|v| v.to_str().ok()) {
                    if !email.is_empty() {
                        log::debug!("Using caller from X-User-Email header: {}", email);
                        return Ok(CallerIdentity(Caller::Name(email.to_string())));
                    }
                }
            }

            Ok(CallerIdentity(Caller::Anonymous))
        }
    }
}
