pub mod account_repository;
pub mod social_connection_repository;
pub mod user_preferences_repository;
