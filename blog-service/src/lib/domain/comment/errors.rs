use thiserror::Error;

use crate::domain::comment::models::CommentId;

/// Top-level error type for all comment operations
#[derive(Debug, Clone, Error)]
pub enum CommentError {
    // Domain-level errors
    #[error("Comment not found: {0}")]
    NotFound(CommentId),

    #[error("Comment is owned by another user")]
    Forbidden,

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for CommentError {
    fn from(err: anyhow::Error) -> Self {
        CommentError::Unknown(err.to_string())
    }
}
