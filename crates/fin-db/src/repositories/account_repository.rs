//! Account repository: keyed reads and guarded writes for account rows and
//! their role sets.
//!
//! Role grants live in `account_roles` with a composite primary key, so the
//! store itself rejects duplicate entries. Every write that touches an
//! account row is guarded by the row's `version` column; a write whose guard
//! matches no row signals either a missing account or a lost race, which the
//! caller disambiguates.

use crate::{DbError, Result as DbErrorResult};

use fin_core::{Account, ErrorLocation, NewAccount};

use std::collections::{BTreeMap, BTreeSet};
use std::panic::Location;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const ACCOUNT_COLUMNS: &str =
    "id, email, display_name, external_id, locked, trusted, version, created_at, updated_at";

pub struct AccountRepository {
    pool: SqlitePool,
}

impl AccountRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert the candidate and its role set in one transaction and return
    /// the persisted account with its store-assigned id.
    pub async fn create(&self, candidate: &NewAccount) -> DbErrorResult<Account> {
        let now = Utc::now().timestamp();

        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
                INSERT INTO accounts (
                    email, display_name, external_id, locked, trusted, version,
                    created_at, updated_at
                ) VALUES (?, ?, ?, 0, 0, 1, ?, ?)
            "#,
        )
        .bind(&candidate.email)
        .bind(&candidate.display_name)
        .bind(&candidate.external_id)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        let id = result.last_insert_rowid();

        for role in &candidate.roles {
            sqlx::query("INSERT INTO account_roles (account_id, role) VALUES (?, ?)")
                .bind(id)
                .bind(role)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        self.find_by_id(id).await?.ok_or_else(|| DbError::Integrity {
            message: format!("account {} missing after insert", id),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Account>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM accounts WHERE id = ?",
            ACCOUNT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        self.attach_roles(row).await
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<Account>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM accounts WHERE email = ?",
            ACCOUNT_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        self.attach_roles(row).await
    }

    pub async fn find_by_external_id(&self, external_id: &str) -> DbErrorResult<Option<Account>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM accounts WHERE external_id = ?",
            ACCOUNT_COLUMNS
        ))
        .bind(external_id)
        .fetch_optional(&self.pool)
        .await?;

        self.attach_roles(row).await
    }

    /// All accounts ordered by email ascending, role sets included.
    pub async fn find_all_by_email(&self) -> DbErrorResult<Vec<Account>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM accounts ORDER BY email ASC",
            ACCOUNT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        let role_rows = sqlx::query("SELECT account_id, role FROM account_roles")
            .fetch_all(&self.pool)
            .await?;

        let mut roles_by_account: BTreeMap<i64, BTreeSet<String>> = BTreeMap::new();
        for role_row in role_rows {
            let account_id: i64 = role_row.try_get("account_id")?;
            let role: String = role_row.try_get("role")?;
            roles_by_account.entry(account_id).or_default().insert(role);
        }

        rows.into_iter()
            .map(|row| -> DbErrorResult<Account> {
                let id: i64 = row.try_get("id")?;
                let roles = roles_by_account.remove(&id).unwrap_or_default();
                map_account(&row, roles)
            })
            .collect()
    }

    /// Guarded write: persists the scalar columns and replaces the role set
    /// when the caller's `version` still matches the stored row, bumping the
    /// version. Returns the number of rows the guard matched; zero means the
    /// account is missing or was modified concurrently, and nothing was
    /// written.
    pub async fn update(&self, account: &Account) -> DbErrorResult<u64> {
        let updated_at = account.updated_at.timestamp();

        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
                UPDATE accounts
                SET email = ?, display_name = ?, external_id = ?,
                    locked = ?, trusted = ?, version = version + 1, updated_at = ?
                WHERE id = ? AND version = ?
            "#,
        )
        .bind(&account.email)
        .bind(&account.display_name)
        .bind(&account.external_id)
        .bind(account.locked)
        .bind(account.trusted)
        .bind(updated_at)
        .bind(account.id)
        .bind(account.version)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(0);
        }

        sqlx::query("DELETE FROM account_roles WHERE account_id = ?")
            .bind(account.id)
            .execute(&mut *tx)
            .await?;

        for role in &account.roles {
            sqlx::query("INSERT INTO account_roles (account_id, role) VALUES (?, ?)")
                .bind(account.id)
                .bind(role)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(result.rows_affected())
    }

    async fn attach_roles(&self, row: Option<SqliteRow>) -> DbErrorResult<Option<Account>> {
        match row {
            Some(row) => {
                let id: i64 = row.try_get("id")?;
                let roles = self.roles_for(id).await?;
                Ok(Some(map_account(&row, roles)?))
            }
            None => Ok(None),
        }
    }

    async fn roles_for(&self, account_id: i64) -> DbErrorResult<BTreeSet<String>> {
        let rows = sqlx::query("SELECT role FROM account_roles WHERE account_id = ?")
            .bind(account_id)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(|row| row.try_get::<String, _>("role").map_err(DbError::from))
            .collect()
    }
}

fn map_account(row: &SqliteRow, roles: BTreeSet<String>) -> DbErrorResult<Account> {
    Ok(Account {
        id: row.try_get("id")?,
        email: row.try_get("email")?,
        display_name: row.try_get("display_name")?,
        external_id: row.try_get("external_id")?,
        roles,
        locked: row.try_get("locked")?,
        trusted: row.try_get("trusted")?,
        version: row.try_get("version")?,
        created_at: timestamp_column(row.try_get("created_at")?, "accounts.created_at")?,
        updated_at: timestamp_column(row.try_get("updated_at")?, "accounts.updated_at")?,
    })
}

#[track_caller]
fn timestamp_column(seconds: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0).ok_or_else(|| DbError::Integrity {
        message: format!("invalid timestamp in {}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}
