use crate::{Account, NewAccount, ROLE_ADMIN, ROLE_USER, UserRef};

use std::collections::BTreeSet;

use chrono::Utc;

fn account_with_roles(roles: &[&str]) -> Account {
    let now = Utc::now();
    Account {
        id: 1,
        email: Some("erik@example.com".to_string()),
        display_name: "Erik".to_string(),
        external_id: None,
        roles: roles.iter().map(|r| r.to_string()).collect(),
        locked: false,
        trusted: false,
        version: 1,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn test_account_user_ref_uses_numeric_id() {
    let account = account_with_roles(&[ROLE_USER]);

    assert_eq!(account.user_ref(), UserRef(1));
    assert_eq!(account.user_ref().to_string(), "user:1");
}

#[test]
fn test_account_is_admin_requires_admin_role() {
    let user = account_with_roles(&[ROLE_USER]);
    let admin = account_with_roles(&[ROLE_USER, ROLE_ADMIN]);

    assert!(!user.is_admin());
    assert!(admin.is_admin());
}

#[test]
fn test_role_set_rejects_duplicates() {
    let mut roles: BTreeSet<String> = BTreeSet::new();
    roles.insert(ROLE_USER.to_string());
    roles.insert(ROLE_USER.to_string());

    assert_eq!(roles.len(), 1);
}

#[test]
fn test_assign_default_roles_replaces_role_set() {
    let mut candidate = NewAccount::new("Erik").with_email("erik@example.com");
    candidate.roles.insert("ROLE_SOMETHING".to_string());

    candidate.assign_default_roles();

    assert_eq!(candidate.roles.len(), 1);
    assert!(candidate.roles.contains(ROLE_USER));
}
