//! Social connection reads. The sign-in flow owns the records; this backend
//! attaches them to account views.

use crate::Result as DbErrorResult;

use fin_core::SocialConnection;

use sqlx::{Row, SqlitePool};

pub struct SocialConnectionRepository {
    pool: SqlitePool,
}

impl SocialConnectionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_account(&self, account_id: i64) -> DbErrorResult<Vec<SocialConnection>> {
        let rows = sqlx::query(
            r#"
                SELECT id, account_id, provider, provider_user_id,
                    display_name, image_url, profile_url
                FROM social_connections
                WHERE account_id = ?
                ORDER BY provider
            "#,
        )
        .bind(account_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| -> DbErrorResult<SocialConnection> {
                Ok(SocialConnection {
                    id: row.try_get("id")?,
                    account_id: row.try_get("account_id")?,
                    provider: row.try_get("provider")?,
                    provider_user_id: row.try_get("provider_user_id")?,
                    display_name: row.try_get("display_name")?,
                    image_url: row.try_get("image_url")?,
                    profile_url: row.try_get("profile_url")?,
                })
            })
            .collect()
    }

    /// Insert a connection record. The id on the input is ignored; the
    /// persisted copy carries the store-assigned one.
    pub async fn create(&self, connection: &SocialConnection) -> DbErrorResult<SocialConnection> {
        let result = sqlx::query(
            r#"
                INSERT INTO social_connections (
                    account_id, provider, provider_user_id,
                    display_name, image_url, profile_url
                ) VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(connection.account_id)
        .bind(&connection.provider)
        .bind(&connection.provider_user_id)
        .bind(&connection.display_name)
        .bind(&connection.image_url)
        .bind(&connection.profile_url)
        .execute(&self.pool)
        .await?;

        Ok(SocialConnection {
            id: result.last_insert_rowid(),
            ..connection.clone()
        })
    }
}
