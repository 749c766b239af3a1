use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::article::models::Article;
use crate::domain::article::ports::ArticleServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_articles(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<ArticleSummaryData>>, ApiError> {
    state
        .article_service
        .list_articles()
        .await
        .map_err(ApiError::from)
        .map(|articles| {
            ApiSuccess::new(
                StatusCode::OK,
                articles.iter().map(ArticleSummaryData::from).collect(),
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleSummaryData {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Article> for ArticleSummaryData {
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
