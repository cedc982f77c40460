use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use domains::CreateThread;
use serde_json::{json, Value};

use super::{body, success, with_fields, ApiResult};
use crate::auth::AuthUser;
use crate::state::AppState;

/// `POST /threads`
pub async fn post_thread(
    State(state): State<AppState>,
    user: AuthUser,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult {
    let payload = with_fields(body(payload), &[("owner", user.id())]);
    let thread = CreateThread::from_payload(&payload)?;

    let created = state.services.add_thread.execute(thread).await?;

    Ok(success(StatusCode::CREATED, json!({ "addedThread": created })))
}

/// `GET /threads/{thread_id}`, public.
pub async fn get_thread(State(state): State<AppState>, Path(thread_id): Path<String>) -> ApiResult {
    let thread = state.services.get_thread.execute(&thread_id).await?;

    Ok(success(StatusCode::OK, json!({ "thread": thread })))
}
