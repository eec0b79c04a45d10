use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;
use uuid::Uuid;

use super::claims::Claims;
use super::errors::TokenError;

/// Signing configuration for the token codec.
///
/// The secret should be at least 256 bits (32 bytes) for HS256 and come
/// from the environment or a vault, never from code.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenConfig {
    pub secret: String,

    /// How long issued tokens stay valid, in minutes.
    #[serde(default = "default_validity_minutes")]
    pub validity_minutes: i64,
}

fn default_validity_minutes() -> i64 {
    30
}

/// Issues and verifies signed credential tokens.
///
/// Tokens are HS256 JWTs carrying a subject identifier plus issue and
/// expiry timestamps. Verification is stateless and grants no clock leeway,
/// so a token is rejected the second its expiry passes.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    validity: Duration,
}

impl TokenCodec {
    /// Create a codec from signing configuration.
    pub fn new(config: &TokenConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            algorithm: Algorithm::HS256,
            validity: Duration::minutes(config.validity_minutes),
        }
    }

    /// Issue a token for the given subject using the configured validity.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: Uuid) -> Result<String, TokenError> {
        self.issue_with_validity(subject, self.validity)
    }

    /// Issue a token expiring after the given duration instead of the
    /// configured one.
    pub fn issue_with_validity(
        &self,
        subject: Uuid,
        validity: Duration,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            exp: (now + validity).timestamp(),
            iat: now.timestamp(),
        };

        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a token, returning the subject it was issued to.
    ///
    /// Total over its input: malformed encoding, a bad signature, a missing
    /// or passed expiry, and a subject that is not a valid identifier all
    /// verify to `None`. Callers cannot tell these cases apart.
    pub fn verify(&self, token: &str) -> Option<Uuid> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).ok()?;

        Uuid::parse_str(&token_data.claims.sub).ok()
    }
}
