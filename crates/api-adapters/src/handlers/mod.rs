//! # Handlers
//!
//! Each handler merges path parameters and the authenticated user into the JSON
//! body, builds the entity (which validates it), runs one use case and wraps the
//! result in the `{"status":"success"}` envelope.

pub mod authentications;
pub mod comments;
pub mod likes;
pub mod replies;
pub mod threads;
pub mod users;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Map, Value};

use crate::error::ApiError;

pub type ApiResult = Result<Response, ApiError>;

/// The request body as JSON. An absent or unparsable body reads as `null`,
/// which entity validation then reports as missing properties.
pub(crate) fn body(payload: Result<Json<Value>, JsonRejection>) -> Value {
    match payload {
        Ok(Json(value)) => value,
        Err(rejection) => {
            tracing::debug!(%rejection, "request body ignored");
            Value::Null
        }
    }
}

/// `body` with server-owned fields written over whatever the client sent.
pub(crate) fn with_fields(body: Value, fields: &[(&str, &str)]) -> Value {
    let mut object = match body {
        Value::Object(object) => object,
        _ => Map::new(),
    };
    for (key, value) in fields {
        object.insert((*key).to_owned(), Value::String((*value).to_owned()));
    }
    Value::Object(object)
}

pub(crate) fn success(status: StatusCode, data: Value) -> Response {
    (status, Json(json!({ "status": "success", "data": data }))).into_response()
}

pub(crate) fn success_without_data() -> Response {
    (StatusCode::OK, Json(json!({ "status": "success" }))).into_response()
}

pub async fn health() -> Response {
    Json(json!({ "status": "ok" })).into_response()
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "status": "fail", "message": "resource not found" })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_fields_override_client_fields() {
        let merged = with_fields(
            json!({ "content": "hi", "ownerId": "user-evil" }),
            &[("threadId", "thread-123"), ("ownerId", "user-123")],
        );
        assert_eq!(
            merged,
            json!({ "content": "hi", "threadId": "thread-123", "ownerId": "user-123" })
        );
    }

    #[test]
    fn non_object_bodies_are_replaced() {
        let merged = with_fields(json!(["content"]), &[("threadId", "thread-123")]);
        assert_eq!(merged, json!({ "threadId": "thread-123" }));

        let merged = with_fields(Value::Null, &[("threadId", "thread-123")]);
        assert_eq!(merged, json!({ "threadId": "thread-123" }));
    }
}
