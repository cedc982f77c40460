use axum::extract::{Path, State};
use domains::ToggleLike;

use super::{success_without_data, ApiResult};
use crate::auth::AuthUser;
use crate::state::AppState;

/// `PUT /threads/{thread_id}/comments/{comment_id}/likes` likes the comment,
/// or takes the like back when the caller already liked it.
pub async fn put_like(
    State(state): State<AppState>,
    user: AuthUser,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> ApiResult {
    let toggle = ToggleLike::new(thread_id, comment_id, user.id())?;

    let like = state.services.like_comment.execute(toggle).await?;
    tracing::debug!(removed = like.is_removal(), "like toggled");

    Ok(success_without_data())
}
