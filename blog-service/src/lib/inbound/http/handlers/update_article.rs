use axum::extract::Path;
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
use crate::domain::article::models::ArticleId;
use crate::domain::article::models::ArticleTitle;
use crate::domain::article::models::UpdateArticleCommand;
use crate::domain::article::ports::ArticleServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn update_article(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedUser>,
    Path(article_id): Path<i64>,
    Json(body): Json<UpdateArticleRequest>,
) -> Result<ApiSuccess<UpdateArticleResponseData>, ApiError> {
    state
        .article_service
        .update_article(
            ArticleId(article_id),
            principal.user_id,
            body.try_into_command()?,
        )
        .await
        .map_err(ApiError::from)
        .map(|ref article| ApiSuccess::new(StatusCode::OK, article.into()))
}

/// HTTP request body for updating an article (raw JSON)
///
/// Omitted fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateArticleRequest {
    title: Option<String>,
    content: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseUpdateArticleRequestError {
    #[error("Invalid article title: {0}")]
    Title(#[from] ArticleTitleError),

    #[error("Article content is empty")]
    EmptyContent,
}

impl UpdateArticleRequest {
    fn try_into_command(self) -> Result<UpdateArticleCommand, ParseUpdateArticleRequestError> {
        let title = self.title.map(ArticleTitle::new).transpose()?;

        if let Some(content) = &self.content {
            if content.trim().is_empty() {
                return Err(ParseUpdateArticleRequestError::EmptyContent);
            }
        }

        Ok(UpdateArticleCommand {
            title,
            content: self.content,
        })
    }
}

impl From<ParseUpdateArticleRequestError> for ApiError {
    fn from(err: ParseUpdateArticleRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateArticleResponseData {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Article> for UpdateArticleResponseData {
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
