use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::article::models::ArticleId;
use crate::domain::article::models::ArticleWithComments;
use crate::domain::article::ports::ArticleServicePort;
use crate::domain::comment::models::Comment;
use crate::inbound::http::router::AppState;

pub async fn get_article(
    State(state): State<AppState>,
    Path(article_id): Path<i64>,
) -> Result<ApiSuccess<GetArticleResponseData>, ApiError> {
    state
        .article_service
        .get_article(ArticleId(article_id))
        .await
        .map_err(ApiError::from)
        .map(|ref found| ApiSuccess::new(StatusCode::OK, found.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetArticleResponseData {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub comments: Vec<CommentData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentData {
    pub id: i64,
    pub content: String,
    pub author_id: i64,
    pub article_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<&ArticleWithComments> for GetArticleResponseData {
    fn from(found: &ArticleWithComments) -> Self {
        Self {
            id: found.article.id.0,
            title: found.article.title.as_str().to_string(),
            content: found.article.content.clone(),
            author_id: found.article.author_id.0,
            created_at: found.article.created_at,
            updated_at: found.article.updated_at,
            comments: found.comments.iter().map(CommentData::from).collect(),
        }
    }
}

impl From<&Comment> for CommentData {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.0,
            content: comment.content.clone(),
            author_id: comment.author_id.0,
            article_id: comment.article_id.0,
            created_at: comment.created_at,
        }
    }
}
