pub mod account_validator;
pub mod error;
pub mod models;

pub use account_validator::AccountValidator;
pub use error::{CoreError, FieldError, Result};
pub use models::account::Account;
pub use models::new_account::NewAccount;
pub use models::roles::{ROLE_ADMIN, ROLE_USER, default_roles};
pub use models::social_connection::SocialConnection;
pub use models::user_preferences::UserPreferences;
pub use models::user_ref::UserRef;

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
