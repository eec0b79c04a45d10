use async_trait::async_trait;

use crate::account::errors::RegistryError;
use crate::account::errors::RepositoryError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::models::IssuedCredentials;
use crate::domain::account::models::RegisterAccountCommand;
use crate::domain::account::models::Username;

/// Port for account domain service operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new account with validated fields.
    ///
    /// # Arguments
    /// * `command` - Validated command containing names, email, username, and password
    ///
    /// # Returns
    /// Created account entity
    ///
    /// # Errors
    /// * `WeakPassword` - Password does not meet the minimum length floor
    /// * `DuplicateIdentifier` - Email or username is already registered
    /// * `Repository` - Storage operation failed
    async fn register(&self, command: RegisterAccountCommand) -> Result<Account, RegistryError>;

    /// Verify a username-or-email plus password pair and issue credentials.
    ///
    /// # Arguments
    /// * `identifier` - Username or email address
    /// * `password` - Plain text password to verify
    ///
    /// # Returns
    /// Issued credentials on success, None when the identifier is unknown
    /// or the password does not match (deliberately indistinguishable)
    ///
    /// # Errors
    /// * `Token` - Token issuance failed
    /// * `Repository` - Storage operation failed
    async fn authenticate(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<Option<IssuedCredentials>, RegistryError>;

    /// Retrieve account by unique identifier.
    ///
    /// # Arguments
    /// * `id` - Account ID
    ///
    /// # Returns
    /// Optional account entity (None if not found)
    ///
    /// # Errors
    /// * `Database` - Storage operation failed
    async fn find_account(&self, id: &AccountId) -> Result<Option<Account>, RepositoryError>;
}

/// Persistence operations for the account aggregate.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Persist new account to storage.
    ///
    /// # Arguments
    /// * `account` - Account entity to create
    ///
    /// # Returns
    /// Created account entity
    ///
    /// # Errors
    /// * `UniqueViolation` - Email or username is already registered
    /// * `Database` - Storage operation failed
    async fn insert(&self, account: Account) -> Result<Account, RepositoryError>;

    /// Retrieve account by identifier.
    ///
    /// # Arguments
    /// * `id` - Account ID
    ///
    /// # Returns
    /// Optional account entity (None if not found)
    ///
    /// # Errors
    /// * `Database` - Storage operation failed
    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, RepositoryError>;

    /// Retrieve account whose username or email matches the identifier.
    ///
    /// # Arguments
    /// * `identifier` - Username or email address
    ///
    /// # Returns
    /// Optional account entity (None if not found)
    ///
    /// # Errors
    /// * `Database` - Storage operation failed
    async fn find_by_identifier(&self, identifier: &str)
        -> Result<Option<Account>, RepositoryError>;

    /// Retrieve account matching either the email or the username.
    ///
    /// Used by registration to detect duplicates before inserting.
    ///
    /// # Arguments
    /// * `email` - Email address to check
    /// * `username` - Username to check
    ///
    /// # Returns
    /// Optional account entity (None if neither is taken)
    ///
    /// # Errors
    /// * `Database` - Storage operation failed
    async fn find_by_email_or_username(
        &self,
        email: &EmailAddress,
        username: &Username,
    ) -> Result<Option<Account>, RepositoryError>;

    /// Update existing account in storage.
    ///
    /// # Arguments
    /// * `account` - Account entity with updated fields
    ///
    /// # Returns
    /// Updated account entity
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `Database` - Storage operation failed
    async fn update(&self, account: Account) -> Result<Account, RepositoryError>;
}
