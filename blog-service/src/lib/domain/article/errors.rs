use thiserror::Error;

use crate::domain::article::models::ArticleId;

/// Error for ArticleTitle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ArticleTitleError {
    #[error("Article title is empty")]
    Empty,

    #[error("Article title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error type for all article operations
#[derive(Debug, Clone, Error)]
pub enum ArticleError {
    #[error("Invalid article title: {0}")]
    InvalidTitle(#[from] ArticleTitleError),

    // Domain-level errors
    #[error("Article not found: {0}")]
    NotFound(ArticleId),

    #[error("Article is owned by another user")]
    Forbidden,

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for ArticleError {
    fn from(err: anyhow::Error) -> Self {
        ArticleError::Unknown(err.to_string())
    }
}
