use crate::ApiError;

use fin_auth::AuthError;
use fin_core::FieldError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Account not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Account not found");
}

#[tokio::test]
async fn test_form_invalid_returns_400_with_field_list() {
    let error = ApiError::FormInvalid {
        errors: vec![
            FieldError::new("display_name", "must not be empty"),
            FieldError::new("email", "must be a valid email address"),
        ],
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["errors"][0]["field"], "display_name");
    assert_eq!(json["error"]["errors"][1]["field"], "email");
}

#[tokio::test]
async fn test_business_rule_returns_422() {
    let error = ApiError::BusinessRule {
        message: "An account with this email already exists".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "BUSINESS_RULE");
}

#[tokio::test]
async fn test_conflict_returns_409_with_version() {
    let error = ApiError::Conflict {
        message: "Account user:1 was modified concurrently".into(),
        current_version: 5,
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "CONFLICT");
    assert!(json["error"]["message"].as_str().unwrap().contains("5"));
}

#[tokio::test]
async fn test_unauthorized_returns_401_and_forbidden_returns_403() {
    let unauthorized = ApiError::Unauthorized {
        message: "Authentication required".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let forbidden = ApiError::Forbidden {
        message: "Administrator role required".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    assert_eq!(
        unauthorized.into_response().status(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(forbidden.into_response().status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_malformed_user_ref_converts_to_bad_request() {
    let auth_err = AuthError::MalformedUserRef {
        value: "42".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_err: ApiError = auth_err.into();

    match api_err {
        ApiError::BadRequest { message, .. } => {
            assert!(message.contains("user:<id>"));
        }
        _ => panic!("Expected BadRequest error"),
    }
}

#[test]
fn test_validation_converts_to_form_invalid() {
    let auth_err = AuthError::Validation {
        errors: vec![FieldError::new("email", "must be a valid email address")],
        location: ErrorLocation::from(Location::caller()),
    };

    let api_err: ApiError = auth_err.into();

    match api_err {
        ApiError::FormInvalid { errors, .. } => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "email");
        }
        _ => panic!("Expected FormInvalid error"),
    }
}

#[test]
fn test_token_expiry_converts_to_unauthorized() {
    let auth_err = AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    };

    let api_err: ApiError = auth_err.into();

    assert!(matches!(api_err, ApiError::Unauthorized { .. }));
}
