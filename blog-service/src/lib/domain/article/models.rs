use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::article::errors::ArticleTitleError;
use crate::domain::comment::models::Comment;
use crate::domain::ownership::Owned;
use crate::domain::user::models::UserId;

/// Article unique identifier type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(pub i64);

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Article aggregate entity.
///
/// `author_id` is set from the creating request's principal and never
/// changes afterwards; it is the sole input to ownership checks.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: String,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Owned for Article {
    fn owner(&self) -> UserId {
        self.author_id
    }
}

/// Article title value type
///
/// Ensures the title is non-empty and at most 255 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    const MAX_LENGTH: usize = 255;

    /// Create a new valid article title.
    ///
    /// # Arguments
    /// * `title` - Raw title string
    ///
    /// # Returns
    /// Validated ArticleTitle value object
    ///
    /// # Errors
    /// * `Empty` - Title is empty or whitespace only
    /// * `TooLong` - Title longer than 255 characters
    pub fn new(title: String) -> Result<Self, ArticleTitleError> {
        if title.trim().is_empty() {
            return Err(ArticleTitleError::Empty);
        }

        let length = title.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(ArticleTitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(title))
    }

    /// Get title as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// An article pending persistence; the identifier is assigned by storage.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub content: String,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Command to create a new article with domain types
#[derive(Debug)]
pub struct CreateArticleCommand {
    pub title: ArticleTitle,
    pub content: String,
}

/// Command to update an existing article with optional validated fields.
///
/// All fields are optional to support partial updates.
/// Only provided fields will be updated.
#[derive(Debug)]
pub struct UpdateArticleCommand {
    pub title: Option<ArticleTitle>,
    pub content: Option<String>,
}

/// A single article together with its comments, as served on article reads.
#[derive(Debug, Clone)]
pub struct ArticleWithComments {
    pub article: Article,
    pub comments: Vec<Comment>,
}
