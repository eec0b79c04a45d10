use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::account::authenticator;
use crate::domain::account::authenticator::Authenticated;
use crate::domain::account::errors::AuthenticationError;
use crate::domain::account::ports::AccountRepository;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Middleware that resolves bearer credentials and stores the caller's
/// identity in request extensions
pub async fn authenticate<R>(
    State(state): State<AppState<R>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response>
where
    R: AccountRepository,
{
    let authorization = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let authenticated = state
        .authenticator
        .authenticate_request(authorization)
        .await
        .map_err(|e| {
            tracing::warn!("Request authentication failed: {}", e);
            ApiError::from(e).into_response()
        })?;

    req.extensions_mut().insert(authenticated);

    Ok(next.run(req).await)
}

/// Middleware that rejects deactivated accounts.
///
/// Must be layered after `authenticate`, which stores the identity it reads.
pub async fn require_active(req: Request, next: Next) -> Result<Response, Response> {
    let authenticated = req
        .extensions()
        .get::<Authenticated>()
        .cloned()
        .ok_or_else(|| ApiError::from(AuthenticationError::NoCredentials).into_response())?;

    authenticator::require_active(authenticated).map_err(|e| {
        tracing::warn!("Deactivated account rejected: {}", e);
        ApiError::from(e).into_response()
    })?;

    Ok(next.run(req).await)
}
