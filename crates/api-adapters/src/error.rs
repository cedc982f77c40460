//! Maps [`AppError`] onto HTTP.
//!
//! Client errors answer `{"status":"fail","message":...}`; server errors answer
//! `{"status":"error","message":...}` without leaking the cause, which is
//! logged instead.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use domains::{AppError, Entity, ValidationError, ValidationKind};
use serde_json::json;

#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            AppError::Validation(_) | AppError::Invariant(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match &self.0 {
            AppError::Validation(err) => validation_message(err),
            AppError::Invariant(msg) | AppError::Unauthorized(msg) | AppError::Conflict(msg) => {
                msg.clone()
            }
            AppError::NotFound(resource) => format!("{resource} not found"),
            AppError::Forbidden(resource) => format!("you are not the owner of this {resource}"),
            AppError::Internal(_) => "an internal server error occurred".to_owned(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
            json!({ "status": "error", "message": self.message() })
        } else {
            tracing::debug!(error = %self.0, status = status.as_u16(), "request rejected");
            json!({ "status": "fail", "message": self.message() })
        };
        (status, Json(body)).into_response()
    }
}

/// Human-readable text for an entity validation failure.
pub fn validation_message(err: &ValidationError) -> String {
    let action = match err.entity {
        Entity::CreateThread => "cannot create a new thread",
        Entity::AddComment => "cannot add comment",
        Entity::AddReply => "cannot add reply",
        Entity::RegisterUser => "cannot create a new user",
        Entity::UserLogin => "cannot log in",
        Entity::RefreshToken => "cannot use refresh token",
        _ => "invalid request",
    };
    let reason = match err.kind {
        ValidationKind::MissingProperty => "a required property is missing",
        ValidationKind::DataTypeMismatch => "a property has the wrong data type",
        ValidationKind::UsernameLimitChar => "the username exceeds 50 characters",
        ValidationKind::UsernameRestrictedCharacter => "the username contains restricted characters",
    };
    format!("{action} because {reason}")
}
