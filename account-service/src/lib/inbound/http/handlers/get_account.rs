use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::AccountProjection;
use crate::domain::account::ports::AccountRepository;
use crate::domain::account::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_account<R>(
    State(state): State<AppState<R>>,
    Path(account_id): Path<String>,
) -> Result<ApiSuccess<AccountProjection>, ApiError>
where
    R: AccountRepository,
{
    let account_id =
        AccountId::from_string(&account_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .account_service
        .find_account(&account_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("Account not found: {}", account_id)))
        .map(|ref account| ApiSuccess::new(StatusCode::OK, account.into()))
}
