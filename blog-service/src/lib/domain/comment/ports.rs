use async_trait::async_trait;

use crate::domain::article::models::ArticleId;
use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentId;
use crate::domain::comment::models::NewComment;
use crate::domain::user::models::UserId;

/// Port for comment domain service operations.
#[async_trait]
pub trait CommentServicePort: Send + Sync + 'static {
    /// Create a new comment on an article, owned by `author`.
    ///
    /// The parent article is referenced by identifier only — its existence
    /// is not re-checked here, matching how deletion leaves comments behind.
    ///
    /// # Arguments
    /// * `author` - The authenticated principal; recorded as the owner
    /// * `article_id` - Parent article identifier
    /// * `content` - Validated comment body
    ///
    /// # Returns
    /// Created comment entity
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_comment(
        &self,
        author: UserId,
        article_id: ArticleId,
        content: String,
    ) -> Result<Comment, CommentError>;

    /// Delete a comment.
    ///
    /// Only the recorded owner may delete; existence is checked before
    /// ownership.
    ///
    /// # Arguments
    /// * `id` - Comment ID to delete
    /// * `principal` - The authenticated user requesting the deletion
    ///
    /// # Errors
    /// * `NotFound` - Comment does not exist
    /// * `Forbidden` - Principal is not the comment's owner
    /// * `DatabaseError` - Database operation failed
    async fn delete_comment(&self, id: CommentId, principal: UserId) -> Result<(), CommentError>;
}

/// Persistence operations for the comment aggregate.
#[async_trait]
pub trait CommentRepository: Send + Sync + 'static {
    /// Persist new comment to storage.
    ///
    /// # Arguments
    /// * `comment` - Comment pending persistence
    ///
    /// # Returns
    /// Created comment entity with its assigned identifier
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, comment: NewComment) -> Result<Comment, CommentError>;

    /// Retrieve comment by identifier.
    ///
    /// # Arguments
    /// * `id` - Comment ID
    ///
    /// # Returns
    /// Optional comment entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, CommentError>;

    /// Retrieve all comments on an article, oldest first.
    ///
    /// # Arguments
    /// * `article_id` - Parent article identifier
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_article(&self, article_id: ArticleId) -> Result<Vec<Comment>, CommentError>;

    /// Remove comment from storage.
    ///
    /// # Arguments
    /// * `id` - Comment ID to delete
    ///
    /// # Errors
    /// * `NotFound` - Comment does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: CommentId) -> Result<(), CommentError>;
}
