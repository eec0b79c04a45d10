use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use credentials::validate_password_strength;
use credentials::PasswordPolicyViolation;
use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::account::errors::EmailError;
use crate::account::errors::NameError;
use crate::account::errors::UsernameError;
use crate::domain::account::models::AccountProjection;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::models::PersonName;
use crate::domain::account::models::RegisterAccountCommand;
use crate::domain::account::models::Username;
use crate::domain::account::ports::AccountRepository;
use crate::domain::account::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

pub async fn register<R>(
    State(state): State<AppState<R>>,
    Json(body): Json<RegisterAccountRequest>,
) -> Result<ApiSuccess<AccountProjection>, ApiError>
where
    R: AccountRepository,
{
    state
        .account_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref account| ApiSuccess::new(StatusCode::CREATED, account.into()))
}

/// HTTP request body for registering an account (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterAccountRequest {
    first_name: String,
    last_name: String,
    email: String,
    username: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterRequestError {
    #[error("Invalid first name: {0}")]
    FirstName(NameError),

    #[error("Invalid last name: {0}")]
    LastName(NameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid username: {0}")]
    Username(#[from] UsernameError),

    #[error("{0}")]
    Password(#[from] PasswordPolicyViolation),
}

impl RegisterAccountRequest {
    fn try_into_command(self) -> Result<RegisterAccountCommand, ParseRegisterRequestError> {
        let first_name =
            PersonName::new(self.first_name).map_err(ParseRegisterRequestError::FirstName)?;
        let last_name =
            PersonName::new(self.last_name).map_err(ParseRegisterRequestError::LastName)?;
        let email = EmailAddress::new(self.email)?;
        let username = Username::new(self.username)?;
        validate_password_strength(&self.password)?;
        Ok(RegisterAccountCommand::new(
            first_name,
            last_name,
            email,
            username,
            self.password,
        ))
    }
}

impl From<ParseRegisterRequestError> for ApiError {
    fn from(err: ParseRegisterRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
