pub mod account;
pub mod new_account;
pub mod roles;
pub mod social_connection;
pub mod user_preferences;
pub mod user_ref;
