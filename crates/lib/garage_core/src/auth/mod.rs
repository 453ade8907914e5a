//! Authentication and authorization logic.
//!
//! Provides password hashing, session tokens, credential registration and
//! verification, and the ownership/admin policy checks used by `garage_api`.

pub mod credentials;
pub mod jwt;
pub mod password;
pub mod policy;

use thiserror::Error;

use crate::store::StoreError;

/// Authentication errors.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error("Invalid credentials")]
    CredentialError,

    #[error("Token error: {0}")]
    TokenError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(StoreError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for AuthError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateEmail(email) => AuthError::DuplicateEmail(email),
            other => AuthError::Store(other),
        }
    }
}

/// Canonical form of an email address for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}
