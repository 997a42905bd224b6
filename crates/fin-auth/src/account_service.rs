//! Account authorization service: creation, identity resolution, role
//! grant/revoke, admin flag toggles, and current-user resolution.
//!
//! All mutations go through a version-guarded persist; a write that loses a
//! race surfaces as a conflict instead of silently clobbering the row.

use crate::{AuthError, Caller, Result as AuthErrorResult};

use fin_core::{Account, AccountValidator, ErrorLocation, NewAccount, UserRef};
use fin_db::AccountRepository;

use std::panic::Location;

use chrono::Utc;
use sqlx::SqlitePool;

pub struct AccountService {
    accounts: AccountRepository,
}

impl AccountService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            accounts: AccountRepository::new(pool),
        }
    }

    /// Create a new account: assign the default role profile, validate,
    /// enforce email uniqueness, then persist. Nothing is written when any
    /// check fails.
    pub async fn create_account(&self, mut candidate: NewAccount) -> AuthErrorResult<Account> {
        // default profile for new users
        candidate.assign_default_roles();

        AccountValidator::validate(&candidate)?;

        if let Some(email) = &candidate.email {
            if self.accounts.find_by_email(email).await?.is_some() {
                return Err(AuthError::BusinessRule {
                    message: "An account with this email already exists. Change the email and try again."
                        .to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        let account = self.accounts.create(&candidate).await?;

        log::info!(
            "A new account was created (id='{}') for '{}'",
            account.user_ref(),
            account.display_name
        );
        Ok(account)
    }

    /// Add a role to the account's role set. Granting a role the account
    /// already holds returns the account unchanged.
    pub async fn grant(&self, user_ref: &str, role: &str) -> AuthErrorResult<Account> {
        AccountValidator::validate_role(role)?;

        let mut account = self.load_by_user_ref(user_ref).await?;
        if !account.roles.insert(role.to_string()) {
            return Ok(account);
        }
        self.persist(account).await
    }

    /// Remove a role from the account's role set. Revoking a role the
    /// account does not hold is a silent no-op.
    pub async fn revoke(&self, user_ref: &str, role: &str) -> AuthErrorResult<Account> {
        let mut account = self.load_by_user_ref(user_ref).await?;
        if !account.roles.remove(role) {
            return Ok(account);
        }
        self.persist(account).await
    }

    pub async fn set_locked(&self, user_ref: &str, locked: bool) -> AuthErrorResult<Account> {
        let mut account = self.load_by_user_ref(user_ref).await?;
        account.locked = locked;
        self.persist(account).await
    }

    pub async fn set_trusted(&self, user_ref: &str, trusted: bool) -> AuthErrorResult<Account> {
        let mut account = self.load_by_user_ref(user_ref).await?;
        account.trusted = trusted;
        self.persist(account).await
    }

    /// Resolve a composite `"user:<id>"` identifier to an account.
    pub async fn load_by_user_ref(&self, user_ref: &str) -> AuthErrorResult<Account> {
        let parsed = user_ref.parse::<UserRef>()?;

        self.accounts
            .find_by_id(parsed.id())
            .await?
            .ok_or_else(|| AuthError::NotFound {
                message: format!("Cannot find user by id {}", parsed),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    pub async fn load_by_external_id(&self, external_id: &str) -> AuthErrorResult<Account> {
        self.accounts
            .find_by_external_id(external_id)
            .await?
            .ok_or_else(|| AuthError::NotFound {
                message: format!("Cannot find user by external id {}", external_id),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    pub async fn load_by_email(&self, email: &str) -> AuthErrorResult<Account> {
        self.accounts
            .find_by_email(email)
            .await?
            .ok_or_else(|| AuthError::NotFound {
                message: format!("Cannot find user by email {}", email),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Resolve the calling identity to an account. Never fails: an absent
    /// session, an unknown principal, or a store failure all degrade to
    /// "no current user".
    pub async fn current_user(&self, caller: &Caller) -> Option<Account> {
        match caller {
            Caller::Account(account) => Some(account.clone()),
            Caller::Name(name) => match self.accounts.find_by_email(name).await {
                Ok(found) => found,
                Err(e) => {
                    log::warn!("Current-user lookup failed for '{}': {}", name, e);
                    None
                }
            },
            Caller::Anonymous => None,
        }
    }

    /// All accounts, ordered by email ascending.
    pub async fn list_accounts(&self) -> AuthErrorResult<Vec<Account>> {
        Ok(self.accounts.find_all_by_email().await?)
    }

    /// Version-guarded write. A guard miss is disambiguated by re-reading
    /// the row: gone means not-found, present means a concurrent writer won.
    async fn persist(&self, mut account: Account) -> AuthErrorResult<Account> {
        account.updated_at = Utc::now();

        let affected = self.accounts.update(&account).await?;
        if affected == 0 {
            return match self.accounts.find_by_id(account.id).await? {
                Some(current) => Err(AuthError::Conflict {
                    message: format!("Account {} was modified concurrently", account.user_ref()),
                    current_version: current.version,
                    location: ErrorLocation::from(Location::caller()),
                }),
                None => Err(AuthError::NotFound {
                    message: format!("Cannot find user by id {}", account.user_ref()),
                    location: ErrorLocation::from(Location::caller()),
                }),
            };
        }

        account.version += 1;
        Ok(account)
    }
}
