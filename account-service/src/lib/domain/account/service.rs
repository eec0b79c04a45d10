use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use credentials::policy::MIN_PASSWORD_LENGTH;
use credentials::PasswordHasher;
use credentials::PasswordPolicyViolation;
use credentials::TokenCodec;

use crate::account::errors::RegistryError;
use crate::account::errors::RepositoryError;
use crate::account::ports::AccountRepository;
use crate::account::ports::AccountServicePort;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::AccountProjection;
use crate::domain::account::models::IssuedCredentials;
use crate::domain::account::models::RegisterAccountCommand;

/// Domain service implementation for account registration and login.
///
/// Concrete implementation of AccountServicePort with dependency injection.
pub struct AccountRegistry<R>
where
    R: AccountRepository,
{
    repository: Arc<R>,
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
}

impl<R> AccountRegistry<R>
where
    R: AccountRepository,
{
    /// Create a new account registry with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Account persistence implementation
    /// * `password_hasher` - Configured password hasher
    /// * `token_codec` - Configured credential token codec
    ///
    /// # Returns
    /// Configured account registry instance
    pub fn new(repository: Arc<R>, password_hasher: PasswordHasher, token_codec: TokenCodec) -> Self {
        Self {
            repository,
            password_hasher,
            token_codec,
        }
    }
}

#[async_trait]
impl<R> AccountServicePort for AccountRegistry<R>
where
    R: AccountRepository,
{
    async fn register(&self, command: RegisterAccountCommand) -> Result<Account, RegistryError> {
        // Length floor holds even for callers that skipped boundary validation
        if command.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(RegistryError::WeakPassword(PasswordPolicyViolation::TooShort));
        }

        let taken = self
            .repository
            .find_by_email_or_username(&command.email, &command.username)
            .await?
            .is_some();
        if taken {
            return Err(RegistryError::DuplicateIdentifier);
        }

        let password_hash = self.password_hasher.hash(&command.password)?;

        let now = Utc::now();
        let account = Account {
            id: AccountId::new(),
            first_name: command.first_name,
            last_name: command.last_name,
            email: command.email,
            username: command.username,
            password_hash,
            is_active: true,
            is_verified: false,
            last_login: None,
            created_at: now,
            updated_at: now,
        };

        // A concurrent registration can still win between the check and the
        // insert; the unique index reports it as a duplicate
        let created_account = self.repository.insert(account).await?;

        Ok(created_account)
    }

    async fn authenticate(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<Option<IssuedCredentials>, RegistryError> {
        let mut account = match self.repository.find_by_identifier(identifier).await? {
            Some(account) => account,
            // Unknown identifier and wrong password produce the same outcome
            None => return Ok(None),
        };

        if !self.password_hasher.verify(password, &account.password_hash) {
            return Ok(None);
        }

        let now = Utc::now();
        account.last_login = Some(now);
        account.updated_at = now;
        let account = self.repository.update(account).await?;

        let access_token = self.token_codec.issue(account.id.0)?;

        Ok(Some(IssuedCredentials {
            access_token,
            token_type: "bearer".to_string(),
            account: AccountProjection::from(&account),
        }))
    }

    async fn find_account(&self, id: &AccountId) -> Result<Option<Account>, RepositoryError> {
        self.repository.find_by_id(id).await
    }
}
