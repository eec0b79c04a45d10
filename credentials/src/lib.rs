//! Credential primitives library
//!
//! Provides the reusable security building blocks for account services:
//! - Password hashing and verification (Argon2id)
//! - Password strength policy
//! - Signed credential token issuance and verification
//!
//! Services own their account domain and wire these primitives behind their
//! own traits. Cost factors and signing secrets are injected at construction
//! so deployments tune them through configuration and tests run with cheap
//! settings.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use credentials::{HashingConfig, PasswordHasher};
//!
//! let hasher = PasswordHasher::new(&HashingConfig::default()).unwrap();
//! let hash = hasher.hash("Correct4Horse").unwrap();
//! assert!(hasher.verify("Correct4Horse", &hash));
//! assert!(!hasher.verify("wrong_password", &hash));
//! ```
//!
//! ## Strength Policy
//! ```
//! use credentials::validate_password_strength;
//!
//! assert!(validate_password_strength("MyPass456").is_ok());
//! assert!(validate_password_strength("short").is_err());
//! ```
//!
//! ## Credential Tokens
//! ```
//! use credentials::{TokenCodec, TokenConfig};
//! use uuid::Uuid;
//!
//! let codec = TokenCodec::new(&TokenConfig {
//!     secret: "doc_secret_key_at_least_32_bytes!!".to_string(),
//!     validity_minutes: 30,
//! });
//!
//! let subject = Uuid::new_v4();
//! let token = codec.issue(subject).unwrap();
//! assert_eq!(codec.verify(&token), Some(subject));
//! ```

pub mod password;
pub mod policy;
pub mod token;

// Re-export commonly used items
pub use password::HashingConfig;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use policy::validate_password_strength;
pub use policy::PasswordPolicyViolation;
pub use token::Claims;
pub use token::TokenCodec;
pub use token::TokenConfig;
pub use token::TokenError;
