use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_article::create_article;
use super::handlers::create_comment::create_comment;
use super::handlers::delete_article::delete_article;
use super::handlers::delete_comment::delete_comment;
use super::handlers::get_article::get_article;
use super::handlers::list_articles::list_articles;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::update_article::update_article;
use super::middleware::authenticate as auth_middleware;
use crate::domain::article::service::ArticleService;
use crate::domain::comment::service::CommentService;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::PostgresArticleRepository;
use crate::outbound::repositories::PostgresCommentRepository;
use crate::outbound::repositories::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PostgresUserRepository>>,
    pub article_service: Arc<ArticleService<PostgresArticleRepository, PostgresCommentRepository>>,
    pub comment_service: Arc<CommentService<PostgresCommentRepository>>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    user_service: Arc<UserService<PostgresUserRepository>>,
    article_service: Arc<ArticleService<PostgresArticleRepository, PostgresCommentRepository>>,
    comment_service: Arc<CommentService<PostgresCommentRepository>>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        user_service,
        article_service,
        comment_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route("/api/articles", get(list_articles))
        .route("/api/articles/:article_id", get(get_article));

    let protected_routes = Router::new()
        .route("/api/articles", post(create_article))
        .route(
            "/api/articles/:article_id",
            put(update_article).delete(delete_article),
        )
        .route("/api/articles/:article_id/comments", post(create_comment))
        .route("/api/comments/:comment_id", delete(delete_comment))
        .route_layer(middleware::from_fn_with_state(
            state.authenticator.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
