use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use crate::domain::article::errors::ArticleError;
use crate::domain::article::models::Article;
use crate::domain::article::models::ArticleId;
use crate::domain::article::models::ArticleTitle;
use crate::domain::article::models::NewArticle;
use crate::domain::article::ports::ArticleRepository;
use crate::domain::user::models::UserId;

pub struct PostgresArticleRepository {
    pool: PgPool,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ArticleRow {
    fn try_into_article(self) -> Result<Article, ArticleError> {
        Ok(Article {
            id: ArticleId(self.id),
            title: ArticleTitle::new(self.title)?,
            content: self.content,
            author_id: UserId(self.author_id),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn create(&self, article: NewArticle) -> Result<Article, ArticleError> {
        let row = sqlx::query_as::<_, ArticleRow>(
            r#"
            INSERT INTO articles (title, content, author_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            RETURNING id, title, content, author_id, created_at, updated_at
            "#,
        )
        .bind(article.title.as_str())
        .bind(&article.content)
        .bind(article.author_id.0)
        .bind(article.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ArticleError::DatabaseError(e.to_string()))?;

        row.try_into_article()
    }

    async fn find_by_id(&self, id: ArticleId) -> Result<Option<Article>, ArticleError> {
        let row = sqlx::query_as::<_, ArticleRow>(
            r#"
            SELECT id, title, content, author_id, created_at, updated_at
            FROM articles
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ArticleError::DatabaseError(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(r.try_into_article()?)),
            None => Ok(None),
        }
    }

    async fn list_all(&self) -> Result<Vec<Article>, ArticleError> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            r#"
            SELECT id, title, content, author_id, created_at, updated_at
            FROM articles
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ArticleError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(ArticleRow::try_into_article).collect()
    }

    async fn update(&self, article: Article) -> Result<Article, ArticleError> {
        let result = sqlx::query(
            r#"
            UPDATE articles
            SET title = $2, content = $3, updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(article.id.0)
        .bind(article.title.as_str())
        .bind(&article.content)
        .bind(article.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ArticleError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ArticleError::NotFound(article.id));
        }

        Ok(article)
    }

    async fn delete(&self, id: ArticleId) -> Result<(), ArticleError> {
        let result = sqlx::query(
            r#"
            DELETE FROM articles
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| ArticleError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ArticleError::NotFound(id));
        }

        Ok(())
    }
}
