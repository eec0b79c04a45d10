use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::account::models::IssuedCredentials;
use crate::domain::account::ports::AccountRepository;
use crate::domain::account::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

pub async fn login<R>(
    State(state): State<AppState<R>>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<IssuedCredentials>, ApiError>
where
    R: AccountRepository,
{
    state
        .account_service
        .authenticate(&body.identifier, &body.password)
        .await
        .map_err(ApiError::from)?
        // One uniform rejection for unknown identifiers and wrong passwords
        .ok_or_else(|| ApiError::Unauthorized("Invalid credentials".to_string()))
        .map(|credentials| ApiSuccess::new(StatusCode::OK, credentials))
}

/// HTTP request body for logging in (raw JSON).
///
/// The identifier field accepts either a username or an email address.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    identifier: String,
    password: String,
}
