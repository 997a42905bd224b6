use crate::{CoreError, UserRef};

use std::str::FromStr;

#[test]
fn test_user_ref_parses_composite_identifier() {
    let user_ref = UserRef::from_str("user:42").unwrap();

    assert_eq!(user_ref.id(), 42);
}

#[test]
fn test_user_ref_round_trips_through_display() {
    let user_ref = UserRef(7);

    let parsed = UserRef::from_str(&user_ref.to_string()).unwrap();

    assert_eq!(parsed, user_ref);
}

#[test]
fn test_user_ref_rejects_non_numeric_id() {
    let result = UserRef::from_str("user:abc");

    assert!(matches!(result, Err(CoreError::MalformedUserRef { .. })));
}

#[test]
fn test_user_ref_rejects_missing_prefix() {
    let result = UserRef::from_str("42");

    assert!(matches!(result, Err(CoreError::MalformedUserRef { .. })));
}

#[test]
fn test_user_ref_rejects_wrong_prefix() {
    let result = UserRef::from_str("group:42");

    assert!(matches!(result, Err(CoreError::MalformedUserRef { .. })));
}

#[test]
fn test_user_ref_rejects_extra_tokens() {
    let result = UserRef::from_str("user:42:extra");

    assert!(matches!(result, Err(CoreError::MalformedUserRef { .. })));
}

#[test]
fn test_user_ref_rejects_empty_string() {
    let result = UserRef::from_str("");

    assert!(matches!(result, Err(CoreError::MalformedUserRef { .. })));
}
