use std::sync::Arc;

use credentials::TokenCodec;

use crate::account::errors::AuthenticationError;
use crate::account::ports::AccountServicePort;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::AccountProjection;
use crate::domain::account::ports::AccountRepository;
use crate::domain::account::service::AccountRegistry;

/// Authenticated identity produced by the request pipeline.
///
/// Stored in request extensions so handlers can read the caller.
#[derive(Debug, Clone)]
pub struct Authenticated {
    pub account: AccountProjection,
}

/// Resolves bearer credentials on incoming requests to account identities.
pub struct RequestAuthenticator<R>
where
    R: AccountRepository,
{
    registry: Arc<AccountRegistry<R>>,
    token_codec: TokenCodec,
}

impl<R> RequestAuthenticator<R>
where
    R: AccountRepository,
{
    /// Create a new request authenticator.
    ///
    /// # Arguments
    /// * `registry` - Account registry used to load the token subject
    /// * `token_codec` - Codec that verifies incoming tokens
    pub fn new(registry: Arc<AccountRegistry<R>>, token_codec: TokenCodec) -> Self {
        Self {
            registry,
            token_codec,
        }
    }

    /// Authenticate a request from its Authorization header value.
    ///
    /// Extracts the bearer token, verifies it, and loads the subject account.
    ///
    /// # Arguments
    /// * `authorization` - Raw Authorization header value, if present
    ///
    /// # Returns
    /// Authenticated identity of the caller
    ///
    /// # Errors
    /// * `NoCredentials` - Header missing or not a bearer scheme
    /// * `InvalidCredentials` - Token invalid, expired, or subject unknown
    /// * `Repository` - Storage operation failed
    pub async fn authenticate_request(
        &self,
        authorization: Option<&str>,
    ) -> Result<Authenticated, AuthenticationError> {
        let token =
            extract_bearer_token(authorization).ok_or(AuthenticationError::NoCredentials)?;

        let subject = self
            .token_codec
            .verify(token)
            .ok_or(AuthenticationError::InvalidCredentials)?;

        // A token can outlive its account, so a miss is a credential
        // problem rather than a lookup problem
        let account = self
            .registry
            .find_account(&AccountId(subject))
            .await?
            .ok_or(AuthenticationError::InvalidCredentials)?;

        Ok(Authenticated {
            account: AccountProjection::from(&account),
        })
    }
}

/// Reject authenticated callers whose account is deactivated.
///
/// Kept separate from the pipeline so routes opt in per endpoint.
pub fn require_active(authenticated: Authenticated) -> Result<Authenticated, AuthenticationError> {
    if !authenticated.account.is_active {
        return Err(AuthenticationError::InactiveAccount);
    }
    Ok(authenticated)
}

fn extract_bearer_token(authorization: Option<&str>) -> Option<&str> {
    // The auth-scheme is case-insensitive per RFC 7235
    let (scheme, token) = authorization?.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("Bearer") {
        return None;
    }
    Some(token)
}
