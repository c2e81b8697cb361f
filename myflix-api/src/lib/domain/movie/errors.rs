use thiserror::Error;

/// Error for MovieId / ActorId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MovieIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for catalog queries
#[derive(Debug, Clone, Error)]
pub enum MovieError {
    #[error("No such movie: {0}")]
    NotFound(String),

    #[error("No such genre: {0}")]
    GenreNotFound(String),

    #[error("No such director: {0}")]
    DirectorNotFound(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
