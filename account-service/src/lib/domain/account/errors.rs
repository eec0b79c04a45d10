use credentials::PasswordError;
use credentials::PasswordPolicyViolation;
use credentials::TokenError;
use thiserror::Error;

/// Error for AccountId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for PersonName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("Name cannot be empty")]
    Empty,

    #[error("Name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error(
        "Username contains invalid characters (only alphanumeric, underscore, and hyphen allowed)"
    )]
    InvalidCharacters,
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),

    #[error("Email too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for account persistence operations
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    #[error("Identifier already registered")]
    UniqueViolation,

    #[error("Account not found: {0}")]
    NotFound(String),

    #[error("Stored account data is corrupted: {0}")]
    Corrupted(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Top-level error for account registration and login operations
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    // Domain-level errors
    #[error("{0}")]
    WeakPassword(#[from] PasswordPolicyViolation),

    #[error("Username or email already exists")]
    DuplicateIdentifier,

    // Infrastructure errors
    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Repository error: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for RegistryError {
    fn from(err: RepositoryError) -> Self {
        match err {
            // An insert losing the uniqueness race is a duplicate, not an outage
            RepositoryError::UniqueViolation => RegistryError::DuplicateIdentifier,
            other => RegistryError::Repository(other),
        }
    }
}

/// Error for the request authentication pipeline
#[derive(Debug, Clone, Error)]
pub enum AuthenticationError {
    #[error("Not authenticated")]
    NoCredentials,

    #[error("Could not validate credentials")]
    InvalidCredentials,

    #[error("Inactive user")]
    InactiveAccount,

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
