use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::article::errors::ArticleError;
use crate::domain::article::models::Article;
use crate::domain::article::models::ArticleId;
use crate::domain::article::models::ArticleWithComments;
use crate::domain::article::models::CreateArticleCommand;
use crate::domain::article::models::NewArticle;
use crate::domain::article::models::UpdateArticleCommand;
use crate::domain::article::ports::ArticleRepository;
use crate::domain::article::ports::ArticleServicePort;
use crate::domain::comment::ports::CommentRepository;
use crate::domain::ownership::authorize_owner;
use crate::domain::ownership::OwnershipError;
use crate::domain::user::models::UserId;

/// Domain service implementation for article operations.
///
/// Mutations run the ownership policy against the loaded article before
/// touching storage.
pub struct ArticleService<AR, CR>
where
    AR: ArticleRepository,
    CR: CommentRepository,
{
    articles: Arc<AR>,
    comments: Arc<CR>,
}

impl<AR, CR> ArticleService<AR, CR>
where
    AR: ArticleRepository,
    CR: CommentRepository,
{
    /// Create a new article service with injected dependencies.
    ///
    /// # Arguments
    /// * `articles` - Article persistence implementation
    /// * `comments` - Comment persistence, read on single-article loads
    ///
    /// # Returns
    /// Configured article service instance
    pub fn new(articles: Arc<AR>, comments: Arc<CR>) -> Self {
        Self { articles, comments }
    }

    fn ownership_error(id: ArticleId, err: OwnershipError) -> ArticleError {
        match err {
            OwnershipError::NotFound => ArticleError::NotFound(id),
            OwnershipError::Forbidden => ArticleError::Forbidden,
        }
    }
}

#[async_trait]
impl<AR, CR> ArticleServicePort for ArticleService<AR, CR>
where
    AR: ArticleRepository,
    CR: CommentRepository,
{
    async fn create_article(
        &self,
        author: UserId,
        command: CreateArticleCommand,
    ) -> Result<Article, ArticleError> {
        let article = NewArticle {
            title: command.title,
            content: command.content,
            author_id: author,
            created_at: Utc::now(),
        };

        let created = self.articles.create(article).await?;

        tracing::info!(article_id = %created.id, author_id = %author, "Article created");

        Ok(created)
    }

    async fn list_articles(&self) -> Result<Vec<Article>, ArticleError> {
        self.articles.list_all().await
    }

    async fn get_article(&self, id: ArticleId) -> Result<ArticleWithComments, ArticleError> {
        let article = self
            .articles
            .find_by_id(id)
            .await?
            .ok_or(ArticleError::NotFound(id))?;

        let comments = self
            .comments
            .find_by_article(id)
            .await
            .map_err(|e| ArticleError::DatabaseError(e.to_string()))?;

        Ok(ArticleWithComments { article, comments })
    }

    async fn update_article(
        &self,
        id: ArticleId,
        principal: UserId,
        command: UpdateArticleCommand,
    ) -> Result<Article, ArticleError> {
        let found = self.articles.find_by_id(id).await?;
        let mut article =
            authorize_owner(found, principal).map_err(|e| Self::ownership_error(id, e))?;

        if let Some(new_title) = command.title {
            article.title = new_title;
        }

        if let Some(new_content) = command.content {
            article.content = new_content;
        }

        article.updated_at = Utc::now();

        self.articles.update(article).await
    }

    async fn delete_article(&self, id: ArticleId, principal: UserId) -> Result<(), ArticleError> {
        let found = self.articles.find_by_id(id).await?;
        let article =
            authorize_owner(found, principal).map_err(|e| Self::ownership_error(id, e))?;

        // Comments referencing the article are deliberately left behind.
        self.articles.delete(article.id).await?;

        tracing::info!(article_id = %id, "Article deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::article::models::ArticleTitle;
    use crate::domain::comment::errors::CommentError;
    use crate::domain::comment::models::Comment;
    use crate::domain::comment::models::CommentId;
    use crate::domain::comment::models::NewComment;

    mock! {
        pub TestArticleRepository {}

        #[async_trait]
        impl ArticleRepository for TestArticleRepository {
            async fn create(&self, article: NewArticle) -> Result<Article, ArticleError>;
            async fn find_by_id(&self, id: ArticleId) -> Result<Option<Article>, ArticleError>;
            async fn list_all(&self) -> Result<Vec<Article>, ArticleError>;
            async fn update(&self, article: Article) -> Result<Article, ArticleError>;
            async fn delete(&self, id: ArticleId) -> Result<(), ArticleError>;
        }
    }

    mock! {
        pub TestCommentRepository {}

        #[async_trait]
        impl CommentRepository for TestCommentRepository {
            async fn create(&self, comment: NewComment) -> Result<Comment, CommentError>;
            async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, CommentError>;
            async fn find_by_article(&self, article_id: ArticleId) -> Result<Vec<Comment>, CommentError>;
            async fn delete(&self, id: CommentId) -> Result<(), CommentError>;
        }
    }

    fn stored_article(id: i64, author: i64) -> Article {
        Article {
            id: ArticleId(id),
            title: ArticleTitle::new("A title".to_string()).unwrap(),
            content: "Some content".to_string(),
            author_id: UserId(author),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_article_records_author() {
        let mut articles = MockTestArticleRepository::new();
        let comments = MockTestCommentRepository::new();

        articles
            .expect_create()
            .withf(|article| {
                article.title.as_str() == "A title" && article.author_id == UserId(7)
            })
            .times(1)
            .returning(|article| {
                Ok(Article {
                    id: ArticleId(1),
                    title: article.title,
                    content: article.content,
                    author_id: article.author_id,
                    created_at: article.created_at,
                    updated_at: article.created_at,
                })
            });

        let service = ArticleService::new(Arc::new(articles), Arc::new(comments));

        let command = CreateArticleCommand {
            title: ArticleTitle::new("A title".to_string()).unwrap(),
            content: "Some content".to_string(),
        };

        let article = service.create_article(UserId(7), command).await.unwrap();
        assert_eq!(article.id, ArticleId(1));
        assert_eq!(article.author_id, UserId(7));
    }

    #[tokio::test]
    async fn test_get_article_includes_comments() {
        let mut articles = MockTestArticleRepository::new();
        let mut comments = MockTestCommentRepository::new();

        articles
            .expect_find_by_id()
            .with(eq(ArticleId(1)))
            .times(1)
            .returning(|_| Ok(Some(stored_article(1, 7))));

        comments
            .expect_find_by_article()
            .with(eq(ArticleId(1)))
            .times(1)
            .returning(|article_id| {
                Ok(vec![Comment {
                    id: CommentId(5),
                    content: "Nice".to_string(),
                    author_id: UserId(9),
                    article_id,
                    created_at: Utc::now(),
                }])
            });

        let service = ArticleService::new(Arc::new(articles), Arc::new(comments));

        let result = service.get_article(ArticleId(1)).await.unwrap();
        assert_eq!(result.article.id, ArticleId(1));
        assert_eq!(result.comments.len(), 1);
        assert_eq!(result.comments[0].id, CommentId(5));
    }

    #[tokio::test]
    async fn test_get_article_not_found() {
        let mut articles = MockTestArticleRepository::new();
        let comments = MockTestCommentRepository::new();

        articles
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = ArticleService::new(Arc::new(articles), Arc::new(comments));

        let result = service.get_article(ArticleId(999)).await;
        assert!(matches!(result.unwrap_err(), ArticleError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_article_by_owner() {
        let mut articles = MockTestArticleRepository::new();
        let comments = MockTestCommentRepository::new();

        articles
            .expect_find_by_id()
            .with(eq(ArticleId(1)))
            .times(1)
            .returning(|_| Ok(Some(stored_article(1, 7))));

        articles
            .expect_update()
            .withf(|article| {
                article.title.as_str() == "New title" && article.content == "Some content"
            })
            .times(1)
            .returning(|article| Ok(article));

        let service = ArticleService::new(Arc::new(articles), Arc::new(comments));

        let command = UpdateArticleCommand {
            title: Some(ArticleTitle::new("New title".to_string()).unwrap()),
            content: None,
        };

        let updated = service
            .update_article(ArticleId(1), UserId(7), command)
            .await
            .unwrap();
        assert_eq!(updated.title.as_str(), "New title");
    }

    #[tokio::test]
    async fn test_update_article_by_non_owner_is_forbidden() {
        let mut articles = MockTestArticleRepository::new();
        let comments = MockTestCommentRepository::new();

        articles
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(stored_article(1, 7))));
        articles.expect_update().times(0);

        let service = ArticleService::new(Arc::new(articles), Arc::new(comments));

        let command = UpdateArticleCommand {
            title: Some(ArticleTitle::new("New title".to_string()).unwrap()),
            content: None,
        };

        let result = service
            .update_article(ArticleId(1), UserId(8), command)
            .await;
        assert!(matches!(result.unwrap_err(), ArticleError::Forbidden));
    }

    #[tokio::test]
    async fn test_delete_article_by_owner() {
        let mut articles = MockTestArticleRepository::new();
        let comments = MockTestCommentRepository::new();

        articles
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(stored_article(1, 7))));

        articles
            .expect_delete()
            .with(eq(ArticleId(1)))
            .times(1)
            .returning(|_| Ok(()));

        let service = ArticleService::new(Arc::new(articles), Arc::new(comments));

        let result = service.delete_article(ArticleId(1), UserId(7)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_article_by_non_owner_is_forbidden() {
        let mut articles = MockTestArticleRepository::new();
        let comments = MockTestCommentRepository::new();

        articles
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(stored_article(1, 7))));
        articles.expect_delete().times(0);

        let service = ArticleService::new(Arc::new(articles), Arc::new(comments));

        let result = service.delete_article(ArticleId(1), UserId(8)).await;
        assert!(matches!(result.unwrap_err(), ArticleError::Forbidden));
    }

    #[tokio::test]
    async fn test_delete_missing_article_is_not_found_not_forbidden() {
        let mut articles = MockTestArticleRepository::new();
        let comments = MockTestCommentRepository::new();

        articles
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        articles.expect_delete().times(0);

        let service = ArticleService::new(Arc::new(articles), Arc::new(comments));

        // Absence is reported as NotFound whoever asks.
        let result = service.delete_article(ArticleId(999), UserId(8)).await;
        assert!(matches!(result.unwrap_err(), ArticleError::NotFound(_)));
    }
}
