use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::account::errors::RepositoryError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::models::PersonName;
use crate::domain::account::models::Username;
use crate::domain::account::ports::AccountRepository;

pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Raw row shape of the accounts table.
#[derive(sqlx::FromRow)]
struct AccountRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    username: String,
    password_hash: String,
    is_active: bool,
    is_verified: bool,
    last_login: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AccountRow> for Account {
    type Error = RepositoryError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        // A row that no longer passes value-object validation means the
        // stored data drifted from the domain rules
        let first_name = PersonName::new(row.first_name)
            .map_err(|e| RepositoryError::Corrupted(e.to_string()))?;
        let last_name = PersonName::new(row.last_name)
            .map_err(|e| RepositoryError::Corrupted(e.to_string()))?;
        let email = EmailAddress::new(row.email)
            .map_err(|e| RepositoryError::Corrupted(e.to_string()))?;
        let username = Username::new(row.username)
            .map_err(|e| RepositoryError::Corrupted(e.to_string()))?;

        Ok(Account {
            id: AccountId(row.id),
            first_name,
            last_name,
            email,
            username,
            password_hash: row.password_hash,
            is_active: row.is_active,
            is_verified: row.is_verified,
            last_login: row.last_login,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn insert(&self, account: Account) -> Result<Account, RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO accounts (id, first_name, last_name, email, username, password_hash,
                                  is_active, is_verified, last_login, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(account.id.0)
        .bind(account.first_name.as_str())
        .bind(account.last_name.as_str())
        .bind(account.email.as_str())
        .bind(account.username.as_str())
        .bind(&account.password_hash)
        .bind(account.is_active)
        .bind(account.is_verified)
        .bind(account.last_login)
        .bind(account.created_at)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return RepositoryError::UniqueViolation;
                }
            }
            RepositoryError::Database(e.to_string())
        })?;

        Ok(account)
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, RepositoryError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, first_name, last_name, email, username, password_hash,
                   is_active, is_verified, last_login, created_at, updated_at
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        row.map(Account::try_from).transpose()
    }

    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<Account>, RepositoryError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, first_name, last_name, email, username, password_hash,
                   is_active, is_verified, last_login, created_at, updated_at
            FROM accounts
            WHERE username = $1 OR email = $1
            "#,
        )
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        row.map(Account::try_from).transpose()
    }

    async fn find_by_email_or_username(
        &self,
        email: &EmailAddress,
        username: &Username,
    ) -> Result<Option<Account>, RepositoryError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, first_name, last_name, email, username, password_hash,
                   is_active, is_verified, last_login, created_at, updated_at
            FROM accounts
            WHERE email = $1 OR username = $2
            "#,
        )
        .bind(email.as_str())
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        row.map(Account::try_from).transpose()
    }

    async fn update(&self, account: Account) -> Result<Account, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE accounts
            SET first_name = $2, last_name = $3, email = $4, username = $5, password_hash = $6,
                is_active = $7, is_verified = $8, last_login = $9, updated_at = $10
            WHERE id = $1
            "#,
        )
        .bind(account.id.0)
        .bind(account.first_name.as_str())
        .bind(account.last_name.as_str())
        .bind(account.email.as_str())
        .bind(account.username.as_str())
        .bind(&account.password_hash)
        .bind(account.is_active)
        .bind(account.is_verified)
        .bind(account.last_login)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return RepositoryError::UniqueViolation;
                }
            }
            RepositoryError::Database(e.to_string())
        })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(account.id.to_string()));
        }

        Ok(account)
    }
}
