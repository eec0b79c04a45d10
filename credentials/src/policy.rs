use thiserror::Error;

/// Shortest acceptable password, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Longest acceptable password, in characters.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Reason a candidate password was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyViolation {
    #[error("Password must be at least 6 characters long")]
    TooShort,

    #[error("Password must be at most 128 characters long")]
    TooLong,

    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,

    #[error("Password must contain at least one lowercase letter")]
    MissingLowercase,

    #[error("Password must contain at least one digit")]
    MissingDigit,
}

/// Validates password strength.
///
/// Checks run in a fixed order and report the first violation:
/// length bounds, then uppercase, lowercase, and digit content.
/// Length is measured in characters, not bytes.
pub fn validate_password_strength(password: &str) -> Result<(), PasswordPolicyViolation> {
    let length = password.chars().count();

    if length < MIN_PASSWORD_LENGTH {
        return Err(PasswordPolicyViolation::TooShort);
    }

    if length > MAX_PASSWORD_LENGTH {
        return Err(PasswordPolicyViolation::TooLong);
    }

    if !password.chars().any(|c| c.is_uppercase()) {
        return Err(PasswordPolicyViolation::MissingUppercase);
    }

    if !password.chars().any(|c| c.is_lowercase()) {
        return Err(PasswordPolicyViolation::MissingLowercase);
    }

    if !password.chars().any(|c| c.is_numeric()) {
        return Err(PasswordPolicyViolation::MissingDigit);
    }

    Ok(())
}
