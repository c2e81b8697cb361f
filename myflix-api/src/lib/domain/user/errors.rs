use thiserror::Error;

use crate::domain::movie::errors::MovieError;
use crate::domain::movie::errors::MovieIdError;

/// Error for DisplayName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DisplayNameError {
    #[error("Name too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email does not appear to be valid: {0}")]
    InvalidFormat(String),
}

/// Error for plaintext password validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password is required")]
    Empty,
}

/// Top-level error for all user-related operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid name: {0}")]
    InvalidName(#[from] DisplayNameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid password: {0}")]
    InvalidPassword(#[from] PasswordError),

    #[error("Invalid movie ID: {0}")]
    InvalidMovieId(#[from] MovieIdError),

    // Domain-level errors
    #[error("No such user: {0}")]
    NotFound(String),

    #[error("User already exists: {0}")]
    EmailAlreadyExists(String),

    // Infrastructure errors
    #[error("Password hashing failed: {0}")]
    PasswordHashing(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Catalog failures while expanding a user's lists are infrastructure failures.
impl From<MovieError> for UserError {
    fn from(err: MovieError) -> Self {
        match err {
            MovieError::DatabaseError(msg) => UserError::DatabaseError(msg),
            other => UserError::Unknown(other.to_string()),
        }
    }
}
