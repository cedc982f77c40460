use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use domains::{AddComment, DeleteComment};
use serde_json::{json, Value};

use super::{body, success, success_without_data, with_fields, ApiResult};
use crate::auth::AuthUser;
use crate::state::AppState;

/// `POST /threads/{thread_id}/comments`
pub async fn post_comment(
    State(state): State<AppState>,
    user: AuthUser,
    Path(thread_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult {
    let payload = with_fields(
        body(payload),
        &[("threadId", thread_id.as_str()), ("ownerId", user.id())],
    );
    let comment = AddComment::from_payload(&payload)?;

    let added = state.services.add_comment.execute(comment).await?;

    Ok(success(
        StatusCode::CREATED,
        json!({
            "addedComment": {
                "id": added.id(),
                "content": added.content(),
                "owner": added.owner_id(),
            }
        }),
    ))
}

/// `DELETE /threads/{thread_id}/comments/{comment_id}`
pub async fn delete_comment(
    State(state): State<AppState>,
    user: AuthUser,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> ApiResult {
    let request = DeleteComment::new(thread_id, comment_id, user.id())?;

    state.services.delete_comment.execute(request).await?;

    Ok(success_without_data())
}
