use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::account::errors::AccountIdError;
use crate::account::errors::EmailError;
use crate::account::errors::NameError;
use crate::account::errors::UsernameError;

/// Account aggregate entity.
///
/// Represents a registered account holder
#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: EmailAddress,
    pub username: Username,
    pub password_hash: String,
    pub is_active: bool,
    pub is_verified: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Account unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(pub Uuid);

impl AccountId {
    /// Generate a new random account ID.
    ///
    /// # Returns
    /// AccountId with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an account ID from string.
    ///
    /// # Arguments
    /// * `s` - UUID string to parse
    ///
    /// # Returns
    /// Parsed AccountId
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, AccountIdError> {
        Uuid::parse_str(s)
            .map(AccountId)
            .map_err(|e| AccountIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Person name value type
///
/// Ensures a name is non-empty and at most 50 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    const MAX_LENGTH: usize = 50;

    /// Create a new valid person name.
    ///
    /// # Errors
    /// * `Empty` - Name has no characters
    /// * `TooLong` - Name longer than 50 characters
    pub fn new(name: String) -> Result<Self, NameError> {
        if name.is_empty() {
            return Err(NameError::Empty);
        }
        // Character count, not byte length, so multibyte names fit the limit
        let length = name.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(NameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        Ok(Self(name))
    }

    /// Get name as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Username value type
///
/// Ensures username is 3-50 characters and contains only alphanumeric, underscore, and hyphen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    const MIN_LENGTH: usize = 3;
    const MAX_LENGTH: usize = 50;

    /// Create a new valid username.
    ///
    /// Validates length and character constraints.
    ///
    /// # Arguments
    /// * `username` - Raw username string
    ///
    /// # Returns
    /// Validated Username value object
    ///
    /// # Errors
    /// * `TooShort` - Username shorter than 3 characters
    /// * `TooLong` - Username longer than 50 characters
    /// * `InvalidCharacters` - Contains non-alphanumeric characters (except _ and -)
    pub fn new(username: String) -> Result<Self, UsernameError> {
        let username = Self::with_valid_length(username)?;
        let username = Self::with_valid_chars(username)?;
        Ok(Self(username))
    }

    fn with_valid_length(username: String) -> Result<String, UsernameError> {
        let length = username.chars().count();
        if length < Self::MIN_LENGTH {
            Err(UsernameError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else if length > Self::MAX_LENGTH {
            Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(username)
        }
    }

    fn with_valid_chars(username: String) -> Result<String, UsernameError> {
        if username
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
        {
            Ok(username)
        } else {
            Err(UsernameError::InvalidCharacters)
        }
    }

    /// Get username as string slice.
    ///
    /// # Returns
    /// Username string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser and caps length
/// at the storage column size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    const MAX_LENGTH: usize = 120;

    /// Create a new validated email address.
    ///
    /// # Arguments
    /// * `email` - Raw email string
    ///
    /// # Returns
    /// Validated EmailAddress value object
    ///
    /// # Errors
    /// * `TooLong` - Email longer than 120 characters
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        let length = email.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(EmailError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    ///
    /// # Returns
    /// Email string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to register a new account with domain types
#[derive(Debug)]
pub struct RegisterAccountCommand {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: EmailAddress,
    pub username: Username,
    pub password: String,
}

impl RegisterAccountCommand {
    /// Construct a new register account command.
    ///
    /// # Arguments
    /// * `first_name` - Validated first name
    /// * `last_name` - Validated last name
    /// * `email` - Validated email address
    /// * `username` - Validated username
    /// * `password` - Plain text password (will be hashed by service)
    ///
    /// # Returns
    /// RegisterAccountCommand with validated fields
    pub fn new(
        first_name: PersonName,
        last_name: PersonName,
        email: EmailAddress,
        username: Username,
        password: String,
    ) -> Self {
        Self {
            first_name,
            last_name,
            email,
            username,
            password,
        }
    }
}

/// Read-only view of an account safe to expose outside the service.
///
/// Carries no password hash and no last-login timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountProjection {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Account> for AccountProjection {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.0,
            username: account.username.as_str().to_string(),
            email: account.email.as_str().to_string(),
            first_name: account.first_name.as_str().to_string(),
            last_name: account.last_name.as_str().to_string(),
            is_active: account.is_active,
            is_verified: account.is_verified,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

/// Result of a successful login: a signed bearer token plus the account view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuedCredentials {
    pub access_token: String,
    pub token_type: String,
    pub account: AccountProjection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_name_length_is_measured_in_characters() {
        // 30 characters but 60 bytes
        let multibyte = "ü".repeat(30);
        assert!(PersonName::new(multibyte).is_ok());

        let at_limit = "a".repeat(50);
        assert!(PersonName::new(at_limit).is_ok());

        let over_limit = "ü".repeat(51);
        assert_eq!(
            PersonName::new(over_limit),
            Err(NameError::TooLong {
                max: 50,
                actual: 51,
            })
        );
    }

    #[test]
    fn test_username_length_is_measured_in_characters() {
        // 26 characters but 27 bytes; 'ü' is alphanumeric
        let multibyte = format!("üser_{}", "x".repeat(21));
        assert!(Username::new(multibyte).is_ok());

        let over_limit = "ü".repeat(51);
        assert_eq!(
            Username::new(over_limit),
            Err(UsernameError::TooLong {
                max: 50,
                actual: 51,
            })
        );
    }

    #[test]
    fn test_email_length_is_measured_in_characters() {
        // 120 characters exactly; the local part stays within the RFC's
        // 64-character cap so only the total length is at the limit
        let domain = format!("{}.{}.com", "b".repeat(63), "c".repeat(31));
        let at_limit = format!("{}@{}", "a".repeat(20), domain);
        assert_eq!(at_limit.chars().count(), 120);
        assert!(EmailAddress::new(at_limit).is_ok());

        let over_limit = format!("{}@{}", "a".repeat(21), domain);
        assert_eq!(
            EmailAddress::new(over_limit),
            Err(EmailError::TooLong {
                max: 120,
                actual: 121,
            })
        );
    }
}
