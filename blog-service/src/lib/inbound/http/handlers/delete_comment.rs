use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::comment::models::CommentId;
use crate::domain::comment::ports::CommentServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_comment(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedUser>,
    Path(comment_id): Path<i64>,
) -> Result<ApiSuccess<()>, ApiError> {
    state
        .comment_service
        .delete_comment(CommentId(comment_id), principal.user_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
