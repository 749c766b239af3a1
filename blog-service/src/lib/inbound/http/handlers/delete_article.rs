use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::article::models::ArticleId;
use crate::domain::article::ports::ArticleServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_article(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedUser>,
    Path(article_id): Path<i64>,
) -> Result<ApiSuccess<()>, ApiError> {
    state
        .article_service
        .delete_article(ArticleId(article_id), principal.user_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
