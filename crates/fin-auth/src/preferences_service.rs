//! Lazy per-account preferences.

use crate::Result as AuthErrorResult;

use fin_core::UserPreferences;
use fin_db::UserPreferencesRepository;

use sqlx::SqlitePool;

pub struct PreferencesService {
    preferences: UserPreferencesRepository,
}

impl PreferencesService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            preferences: UserPreferencesRepository::new(pool),
        }
    }

    /// Return the account's preference record, creating an empty one on
    /// first read. Repeated calls return the same record; the store's
    /// primary key makes a second record for the same account impossible.
    pub async fn get(&self, group_id: i64) -> AuthErrorResult<UserPreferences> {
        if let Some(found) = self.preferences.find_by_group(group_id).await? {
            return Ok(found);
        }

        let created = UserPreferences::empty(group_id);
        self.preferences.create(&created).await?;

        // A concurrent first read may have won the insert; the stored row wins.
        Ok(self
            .preferences
            .find_by_group(group_id)
            .await?
            .unwrap_or(created))
    }
}
