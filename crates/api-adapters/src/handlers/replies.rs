use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use domains::{AddReply, DeleteReply};
use serde_json::{json, Value};

use super::{body, success, success_without_data, with_fields, ApiResult};
use crate::auth::AuthUser;
use crate::state::AppState;

/// `POST /threads/{thread_id}/comments/{comment_id}/replies`
pub async fn post_reply(
    State(state): State<AppState>,
    user: AuthUser,
    Path((thread_id, comment_id)): Path<(String, String)>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult {
    let payload = with_fields(
        body(payload),
        &[
            ("threadId", thread_id.as_str()),
            ("commentId", comment_id.as_str()),
            ("ownerId", user.id()),
        ],
    );
    let reply = AddReply::from_payload(&payload)?;

    let added = state.services.add_reply.execute(reply).await?;

    Ok(success(
        StatusCode::CREATED,
        json!({
            "addedReply": {
                "id": added.id(),
                "content": added.content(),
                "owner": added.owner_id(),
            }
        }),
    ))
}

/// `DELETE /threads/{thread_id}/comments/{comment_id}/replies/{reply_id}`
pub async fn delete_reply(
    State(state): State<AppState>,
    user: AuthUser,
    Path((thread_id, comment_id, reply_id)): Path<(String, String, String)>,
) -> ApiResult {
    let request = DeleteReply::new(thread_id, comment_id, reply_id, user.id())?;

    state.services.delete_reply.execute(request).await?;

    Ok(success_without_data())
}
