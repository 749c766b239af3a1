use async_trait::async_trait;

use crate::domain::article::errors::ArticleError;
use crate::domain::article::models::Article;
use crate::domain::article::models::ArticleId;
use crate::domain::article::models::ArticleWithComments;
use crate::domain::article::models::CreateArticleCommand;
use crate::domain::article::models::NewArticle;
use crate::domain::article::models::UpdateArticleCommand;
use crate::domain::user::models::UserId;

/// Port for article domain service operations.
#[async_trait]
pub trait ArticleServicePort: Send + Sync + 'static {
    /// Create a new article owned by `author`.
    ///
    /// # Arguments
    /// * `author` - The authenticated principal; recorded as the owner
    /// * `command` - Validated command containing title and content
    ///
    /// # Returns
    /// Created article entity
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_article(
        &self,
        author: UserId,
        command: CreateArticleCommand,
    ) -> Result<Article, ArticleError>;

    /// Retrieve all articles, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_articles(&self) -> Result<Vec<Article>, ArticleError>;

    /// Retrieve a single article together with its comments.
    ///
    /// # Arguments
    /// * `id` - Article ID
    ///
    /// # Errors
    /// * `NotFound` - Article does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_article(&self, id: ArticleId) -> Result<ArticleWithComments, ArticleError>;

    /// Update an article's title and/or content.
    ///
    /// Only the recorded owner may update; existence is checked before
    /// ownership.
    ///
    /// # Arguments
    /// * `id` - Article ID to update
    /// * `principal` - The authenticated user requesting the update
    /// * `command` - Command with optional title and content fields
    ///
    /// # Returns
    /// Updated article entity
    ///
    /// # Errors
    /// * `NotFound` - Article does not exist
    /// * `Forbidden` - Principal is not the article's owner
    /// * `DatabaseError` - Database operation failed
    async fn update_article(
        &self,
        id: ArticleId,
        principal: UserId,
        command: UpdateArticleCommand,
    ) -> Result<Article, ArticleError>;

    /// Delete an article.
    ///
    /// Only the recorded owner may delete; existence is checked before
    /// ownership. Comments referencing the article are left in place.
    ///
    /// # Arguments
    /// * `id` - Article ID to delete
    /// * `principal` - The authenticated user requesting the deletion
    ///
    /// # Errors
    /// * `NotFound` - Article does not exist
    /// * `Forbidden` - Principal is not the article's owner
    /// * `DatabaseError` - Database operation failed
    async fn delete_article(&self, id: ArticleId, principal: UserId) -> Result<(), ArticleError>;
}

/// Persistence operations for the article aggregate.
#[async_trait]
pub trait ArticleRepository: Send + Sync + 'static {
    /// Persist new article to storage.
    ///
    /// # Arguments
    /// * `article` - Article pending persistence
    ///
    /// # Returns
    /// Created article entity with its assigned identifier
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, article: NewArticle) -> Result<Article, ArticleError>;

    /// Retrieve article by identifier.
    ///
    /// # Arguments
    /// * `id` - Article ID
    ///
    /// # Returns
    /// Optional article entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: ArticleId) -> Result<Option<Article>, ArticleError>;

    /// Retrieve all articles, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Article>, ArticleError>;

    /// Update existing article in storage.
    ///
    /// # Arguments
    /// * `article` - Article entity with updated fields
    ///
    /// # Returns
    /// Updated article entity
    ///
    /// # Errors
    /// * `NotFound` - Article does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, article: Article) -> Result<Article, ArticleError>;

    /// Remove article from storage.
    ///
    /// # Arguments
    /// * `id` - Article ID to delete
    ///
    /// # Errors
    /// * `NotFound` - Article does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: ArticleId) -> Result<(), ArticleError>;
}
