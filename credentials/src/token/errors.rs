use thiserror::Error;

/// Error type for token issuance.
///
/// Verification has no error type: any rejected token verifies to `None`.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),
}
