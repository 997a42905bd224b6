use crate::{AccountValidator, CoreError, NewAccount};

#[test]
fn test_valid_candidate_passes() {
    let mut candidate = NewAccount::new("Erik Lacerda").with_email("erik@example.com");
    candidate.assign_default_roles();

    assert!(AccountValidator::validate(&candidate).is_ok());
}

#[test]
fn test_candidate_without_email_passes() {
    let mut candidate = NewAccount::new("Erik Lacerda");
    candidate.assign_default_roles();

    assert!(AccountValidator::validate(&candidate).is_ok());
}

#[test]
fn test_empty_display_name_is_rejected() {
    let candidate = NewAccount::new("   ");

    let result = AccountValidator::validate(&candidate);

    let Err(CoreError::Validation { errors, .. }) = result else {
        panic!("expected validation error");
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "display_name");
}

#[test]
fn test_malformed_email_is_rejected() {
    for email in ["no-at-sign", "@nodomain", "user@", "user@nodot", "a b@x.io"] {
        let candidate = NewAccount::new("Erik").with_email(email);

        let result = AccountValidator::validate(&candidate);

        let Err(CoreError::Validation { errors, .. }) = result else {
            panic!("expected validation error for {:?}", email);
        };
        assert_eq!(errors[0].field, "email");
    }
}

#[test]
fn test_all_failures_are_collected() {
    let mut candidate = NewAccount::new("").with_email("not-an-email");
    candidate.roles.insert(String::new());

    let result = AccountValidator::validate(&candidate);

    let Err(CoreError::Validation { errors, .. }) = result else {
        panic!("expected validation error");
    };
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["display_name", "email", "roles"]);
}

#[test]
fn test_overlong_display_name_is_rejected() {
    let candidate = NewAccount::new("x".repeat(121));

    let result = AccountValidator::validate(&candidate);

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn test_validate_role_rejects_empty_token() {
    assert!(AccountValidator::validate_role("ROLE_ADMIN").is_ok());
    assert!(AccountValidator::validate_role("").is_err());
}
