use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::article::models::ArticleId;
use crate::domain::ownership::Owned;
use crate::domain::user::models::UserId;

/// Comment unique identifier type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(pub i64);

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Comment aggregate entity.
///
/// References its parent article by identifier only; the reference is not
/// re-validated after creation, so a comment can outlive its article.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub content: String,
    pub author_id: UserId,
    pub article_id: ArticleId,
    pub created_at: DateTime<Utc>,
}

impl Owned for Comment {
    fn owner(&self) -> UserId {
        self.author_id
    }
}

/// A comment pending persistence; the identifier is assigned by storage.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub content: String,
    pub author_id: UserId,
    pub article_id: ArticleId,
    pub created_at: DateTime<Utc>,
}
