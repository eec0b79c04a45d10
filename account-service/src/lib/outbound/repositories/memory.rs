use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::account::errors::RepositoryError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::models::Username;
use crate::domain::account::ports::AccountRepository;

/// In-memory account store.
///
/// Backs the integration test suite and local experiments; deployments wire
/// the Postgres implementation instead.
#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: Mutex<Vec<Account>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self {
            accounts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn insert(&self, account: Account) -> Result<Account, RepositoryError> {
        let mut accounts = self.accounts.lock().await;

        // Same uniqueness rule the accounts table enforces with indexes
        let taken = accounts
            .iter()
            .any(|existing| existing.email == account.email || existing.username == account.username);
        if taken {
            return Err(RepositoryError::UniqueViolation);
        }

        accounts.push(account.clone());
        Ok(account)
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, RepositoryError> {
        let accounts = self.accounts.lock().await;
        Ok(accounts.iter().find(|account| account.id == *id).cloned())
    }

    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<Account>, RepositoryError> {
        let accounts = self.accounts.lock().await;
        Ok(accounts
            .iter()
            .find(|account| {
                account.username.as_str() == identifier || account.email.as_str() == identifier
            })
            .cloned())
    }

    async fn find_by_email_or_username(
        &self,
        email: &EmailAddress,
        username: &Username,
    ) -> Result<Option<Account>, RepositoryError> {
        let accounts = self.accounts.lock().await;
        Ok(accounts
            .iter()
            .find(|account| account.email == *email || account.username == *username)
            .cloned())
    }

    async fn update(&self, account: Account) -> Result<Account, RepositoryError> {
        let mut accounts = self.accounts.lock().await;
        match accounts.iter_mut().find(|stored| stored.id == account.id) {
            Some(stored) => {
                *stored = account.clone();
                Ok(account)
            }
            None => Err(RepositoryError::NotFound(account.id.to_string())),
        }
    }
}
