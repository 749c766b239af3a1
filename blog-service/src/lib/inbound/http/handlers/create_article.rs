use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::article::errors::ArticleTitleError;
use crate::domain::article::models::Article;
use crate::domain::article::models::ArticleTitle;
use crate::domain::article::models::CreateArticleCommand;
use crate::domain::article::ports::ArticleServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_article(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedUser>,
    Json(body): Json<CreateArticleRequest>,
) -> Result<ApiSuccess<CreateArticleResponseData>, ApiError> {
    state
        .article_service
        .create_article(principal.user_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref article| ApiSuccess::new(StatusCode::CREATED, article.into()))
}

/// HTTP request body for creating an article (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateArticleRequest {
    title: String,
    content: String,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateArticleRequestError {
    #[error("Invalid article title: {0}")]
    Title(#[from] ArticleTitleError),

    #[error("Article content is empty")]
    EmptyContent,
}

impl CreateArticleRequest {
    fn try_into_command(self) -> Result<CreateArticleCommand, ParseCreateArticleRequestError> {
        let title = ArticleTitle::new(self.title)?;

        if self.content.trim().is_empty() {
            return Err(ParseCreateArticleRequestError::EmptyContent);
        }

        Ok(CreateArticleCommand {
            title,
            content: self.content,
        })
    }
}

impl From<ParseCreateArticleRequestError> for ApiError {
    fn from(err: ParseCreateArticleRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateArticleResponseData {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Article> for CreateArticleResponseData {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id.0,
            title: article.title.as_str().to_string(),
            content: article.content.clone(),
            author_id: article.author_id.0,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}
