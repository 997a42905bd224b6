//! Preference records, keyed by the owning account's id.

use crate::{DbError, Result as DbErrorResult};

use fin_core::{ErrorLocation, UserPreferences};

use std::panic::Location;

use sqlx::{Row, SqlitePool};

pub struct UserPreferencesRepository {
    pool: SqlitePool,
}

impl UserPreferencesRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_group(&self, group_id: i64) -> DbErrorResult<Option<UserPreferences>> {
        let row = sqlx::query("SELECT group_id, payload FROM user_preferences WHERE group_id = ?")
            .bind(group_id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|row| -> DbErrorResult<UserPreferences> {
            let payload: String = row.try_get("payload")?;
            Ok(UserPreferences {
                group_id: row.try_get("group_id")?,
                payload: serde_json::from_str(&payload).map_err(|e| DbError::Integrity {
                    message: format!("invalid JSON in user_preferences.payload: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?,
            })
        })
        .transpose()
    }

    /// Insert the record if none exists for the group. A concurrent insert
    /// for the same group is absorbed by the conflict clause, so the call is
    /// safe to race.
    pub async fn create(&self, preferences: &UserPreferences) -> DbErrorResult<()> {
        let payload = preferences.payload.to_string();

        sqlx::query(
            r#"
                INSERT INTO user_preferences (group_id, payload)
                VALUES (?, ?)
                ON CONFLICT (group_id) DO NOTHING
            "#,
        )
        .bind(preferences.group_id)
        .bind(payload)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn update_payload(
        &self,
        group_id: i64,
        payload: &serde_json::Value,
    ) -> DbErrorResult<u64> {
        let result = sqlx::query("UPDATE user_preferences SET payload = ? WHERE group_id = ?")
            .bind(payload.to_string())
            .bind(group_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
