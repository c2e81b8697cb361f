use thiserror::Error;

use crate::domain::user::errors::UserError;

/// Errors raised while establishing or checking a caller's identity
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Returned for both an unknown email and a wrong password.
    #[error("Incorrect email or password.")]
    InvalidCredentials,

    #[error("Unauthorized: {0}")]
    Unauthenticated(String),

    #[error("Permission denied")]
    PermissionDenied,

    // Infrastructure errors
    #[error("Token error: {0}")]
    Token(String),

    #[error("Password verification failed: {0}")]
    Password(String),

    #[error(transparent)]
    User(#[from] UserError),
}
