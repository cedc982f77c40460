use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use domains::RegisterUser;
use serde_json::{json, Value};

use super::{body, success, ApiResult};
use crate::state::AppState;

/// `POST /users`
pub async fn post_user(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult {
    let user = RegisterUser::from_payload(&body(payload))?;

    let registered = state.services.add_user.execute(user).await?;

    Ok(success(StatusCode::CREATED, json!({ "addedUser": registered })))
}
