use crate::{ApiError, AppState, CallerIdentity};

use fin_auth::{Caller, Claims, JwtValidator};

use std::sync::Arc;

use axum::extract::FromRequestParts;
use http::Request;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

async fn state(with_validator: bool) -> AppState {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(":memory:")
                .create_if_missing(true),
        )
        .await
        .expect("Failed to create test pool");

    let jwt_validator = with_validator.then(|| Arc::new(JwtValidator::with_hs256(SECRET)));

    AppState {
        pool,
        jwt_validator,
    }
}

fn parts(builder: http::request::Builder) -> http::request::Parts {
    builder.body(()).unwrap().into_parts().0
}

fn token(email: &str) -> String {
    let claims = Claims {
        sub: email.to_string(),
        email: Some(email.to_string()),
        exp: chrono::Utc::now().timestamp() + 3600,
        iat: chrono::Utc::now().timestamp(),
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SECRET),
    )
    .unwrap()
}

#[tokio::test]
async fn given_no_authorization_header_then_caller_is_anonymous() {
    let state = state(true).await;
    let mut parts = parts(Request::builder().uri("/api/users/me"));

    let CallerIdentity(caller) = CallerIdentity::from_request_parts(&mut parts, &state)
        .await
        .unwrap();

    assert!(caller.is_anonymous());
}

#[tokio::test]
async fn given_valid_bearer_token_then_caller_is_named_by_email() {
    let state = state(true).await;
    let mut parts = parts(
        Request::builder()
            .uri("/api/users/me")
            .header("Authorization", format!("Bearer {}", token("erik@example.com"))),
    );

    let CallerIdentity(caller) = CallerIdentity::from_request_parts(&mut parts, &state)
        .await
        .unwrap();

    assert_eq!(caller.name(), Some("erik@example.com"));
}

#[tokio::test]
async fn given_garbage_bearer_token_then_rejected_with_unauthorized() {
    let state = state(true).await;
    let mut parts = parts(
        Request::builder()
            .uri("/api/users/me")
            .header("Authorization", "Bearer not.a.jwt"),
    );

    let result = CallerIdentity::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn given_non_bearer_scheme_then_rejected_with_unauthorized() {
    let state = state(true).await;
    let mut parts = parts(
        Request::builder()
            .uri("/api/users/me")
            .header("Authorization", "Basic dXNlcjpwYXNz"),
    );

    let result = CallerIdentity::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn given_auth_disabled_then_dev_header_names_the_caller() {
    let state = state(false).await;
    let mut parts = parts(
        Request::builder()
            .uri("/api/users/me")
            .header("X-User-Email", "erik@example.com"),
    );

    let CallerIdentity(caller) = CallerIdentity::from_request_parts(&mut parts, &state)
        .await
        .unwrap();

    assert!(matches!(caller, Caller::Name(ref name) if name == "erik@example.com"));
}

#[tokio::test]
async fn given_auth_enabled_then_dev_header_is_ignored() {
    let state = state(true).await;
    let mut parts = parts(
        Request::builder()
            .uri("/api/users/me")
            .header("X-User-Email", "erik@example.com"),
    );

    let CallerIdentity(caller) = CallerIdentity::from_request_parts(&mut parts, &state)
        .await
        .unwrap();

    assert!(caller.is_anonymous());
}

#[tokio::test]
async fn given_auth_disabled_then_bearer_token_is_rejected() {
    let state = state(false).await;
    let mut parts = parts(
        Request::builder()
            .uri("/api/users/me")
            .header("Authorization", format!("Bearer {}", token("erik@example.com"))),
    );

    let result = CallerIdentity::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}
