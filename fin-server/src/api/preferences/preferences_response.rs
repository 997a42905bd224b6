use fin_core::UserPreferences;
use serde::Serialize;

/// Preference record response
#[derive(Debug, Serialize)]
pub struct PreferencesResponse {
    pub preferences: UserPreferences,
}
