use fin_core::NewAccount;

/// A valid account candidate with default roles assigned.
pub fn candidate(display_name: &str, email: &str) -> NewAccount {
    let mut candidate = NewAccount::new(display_name).with_email(email);
    candidate.assign_default_roles();
    candidate
}
