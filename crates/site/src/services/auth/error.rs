//! Authentication error types.

use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during member signup, login, and logout.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required field is missing or the passwords do not match.
    #[error("{0}")]
    Validation(String),

    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] ocean_clean_core::EmailError),

    /// The email is already registered.
    #[error("this email is already registered")]
    DuplicateEmail,

    /// No user matches the email and password.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Store/persistence error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}
