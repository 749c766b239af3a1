use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::article::models::ArticleId;
use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentId;
use crate::domain::comment::models::NewComment;
use crate::domain::comment::ports::CommentRepository;
use crate::domain::comment::ports::CommentServicePort;
use crate::domain::ownership::authorize_owner;
use crate::domain::ownership::OwnershipError;
use crate::domain::user::models::UserId;

/// Domain service implementation for comment operations.
pub struct CommentService<CR>
where
    CR: CommentRepository,
{
    repository: Arc<CR>,
}

impl<CR> CommentService<CR>
where
    CR: CommentRepository,
{
    /// Create a new comment service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Comment persistence implementation
    ///
    /// # Returns
    /// Configured comment service instance
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> CommentServicePort for CommentService<CR>
where
    CR: CommentRepository,
{
    async fn create_comment(
        &self,
        author: UserId,
        article_id: ArticleId,
        content: String,
    ) -> Result<Comment, CommentError> {
        let comment = NewComment {
            content,
            author_id: author,
            article_id,
            created_at: Utc::now(),
        };

        let created = self.repository.create(comment).await?;

        tracing::info!(
            comment_id = %created.id,
            article_id = %article_id,
            author_id = %author,
            "Comment created"
        );

        Ok(created)
    }

    async fn delete_comment(&self, id: CommentId, principal: UserId) -> Result<(), CommentError> {
        let found = self.repository.find_by_id(id).await?;
        let comment = authorize_owner(found, principal).map_err(|e| match e {
            OwnershipError::NotFound => CommentError::NotFound(id),
            OwnershipError::Forbidden => CommentError::Forbidden,
        })?;

        self.repository.delete(comment.id).await?;

        tracing::info!(comment_id = %id, "Comment deleted");

        Ok(())
    }
}
