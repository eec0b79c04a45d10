use serde::Deserialize;
use serde::Serialize;

/// Claims carried by a credential token.
///
/// All fields are mandatory: a token missing any of them fails
/// verification. `sub` holds the subject identifier the token asserts
/// ownership of, as a string per RFC 7519.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject (account identifier)
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}
