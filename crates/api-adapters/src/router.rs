use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::{self, authentications, comments, likes, replies, threads, users};
use crate::middleware::{cors_policy, standard_middleware};
use crate::state::AppState;

/// Every forum route, with tracing and CORS applied.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/users", post(users::post_user))
        .route(
            "/authentications",
            post(authentications::post_authentication)
                .put(authentications::put_authentication)
                .delete(authentications::delete_authentication),
        )
        .route("/threads", post(threads::post_thread))
        .route("/threads/{thread_id}", get(threads::get_thread))
        .route("/threads/{thread_id}/comments", post(comments::post_comment))
        .route(
            "/threads/{thread_id}/comments/{comment_id}",
            delete(comments::delete_comment),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/replies",
            post(replies::post_reply),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/replies/{reply_id}",
            delete(replies::delete_reply),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/likes",
            put(likes::put_like),
        )
        .fallback(handlers::not_found)
        .layer(standard_middleware())
        .layer(cors_policy())
        .with_state(state)
}
