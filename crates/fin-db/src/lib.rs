pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::account_repository::AccountRepository;
pub use repositories::social_connection_repository::SocialConnectionRepository;
pub use repositories::user_preferences_repository::UserPreferencesRepository;
