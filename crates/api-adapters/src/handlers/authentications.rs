use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use domains::{RefreshToken, UserLogin};
use serde_json::{json, Value};

use super::{body, success, success_without_data, ApiResult};
use crate::state::AppState;

/// `POST /authentications`: log in.
pub async fn post_authentication(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult {
    let login = UserLogin::from_payload(&body(payload))?;

    let auth = state.services.login_user.execute(login).await?;

    Ok(success(StatusCode::CREATED, json!(auth)))
}

/// `PUT /authentications`: trade a refresh token for a new access token.
pub async fn put_authentication(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult {
    let token = RefreshToken::from_payload(&body(payload))?;

    let access_token = state.services.refresh_authentication.execute(token).await?;

    Ok(success(StatusCode::OK, json!({ "accessToken": access_token })))
}

/// `DELETE /authentications`: log out.
pub async fn delete_authentication(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult {
    let token = RefreshToken::from_payload(&body(payload))?;

    state.services.logout_user.execute(token).await?;

    Ok(success_without_data())
}
