use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::account::authenticator::Authenticated;
use crate::domain::account::models::AccountProjection;

/// Return the account behind the presented credentials.
///
/// The authentication middleware has already resolved the caller, so this
/// handler only echoes the stored identity back.
pub async fn current_account(
    Extension(authenticated): Extension<Authenticated>,
) -> Result<ApiSuccess<AccountProjection>, ApiError> {
    Ok(ApiSuccess::new(StatusCode::OK, authenticated.account))
}
