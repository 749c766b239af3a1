use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::article::models::ArticleId;
use crate::domain::comment::models::Comment;
use crate::domain::comment::ports::CommentServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_comment(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedUser>,
    Path(article_id): Path<i64>,
    Json(body): Json<CreateCommentRequest>,
) -> Result<ApiSuccess<CreateCommentResponseData>, ApiError> {
    if body.content.trim().is_empty() {
        return Err(ApiError::BadRequest("Comment content is empty".to_string()));
    }

    state
        .comment_service
        .create_comment(principal.user_id, ArticleId(article_id), body.content)
        .await
        .map_err(ApiError::from)
        .map(|ref comment| ApiSuccess::new(StatusCode::CREATED, comment.into()))
}

/// HTTP request body for creating a comment (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateCommentRequest {
    content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateCommentResponseData {
    pub id: i64,
    pub content: String,
    pub author_id: i64,
    pub article_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<&Comment> for CreateCommentResponseData {
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
