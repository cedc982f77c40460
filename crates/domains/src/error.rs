//! # AppError
//!
//! Centralized error handling for the forum backend.
//! Entity construction fails with [`ValidationError`]; everything that crosses a
//! port fails with [`AppError`].

use std::fmt;
use thiserror::Error;

/// The payload shape a [`ValidationError`] was raised for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    CreateThread,
    CreatedThread,
    ThreadDetail,
    AddComment,
    AddedComment,
    DeleteComment,
    CommentDetail,
    AddReply,
    AddedReply,
    DeleteReply,
    ReplyDetail,
    LikeKey,
    LikeDetail,
    ToggleLike,
    RegisterUser,
    RegisteredUser,
    UserLogin,
    AuthCredentials,
    NewAuth,
    RefreshToken,
}

impl Entity {
    pub const fn code(self) -> &'static str {
        match self {
            Self::CreateThread => "CREATE_THREAD",
            Self::CreatedThread => "CREATED_THREAD",
            Self::ThreadDetail => "THREAD_DETAIL",
            Self::AddComment => "ADD_COMMENT",
            Self::AddedComment => "ADDED_COMMENT",
            Self::DeleteComment => "DELETE_COMMENT",
            Self::CommentDetail => "COMMENT_DETAIL",
            Self::AddReply => "ADD_REPLY",
            Self::AddedReply => "ADDED_REPLY",
            Self::DeleteReply => "DELETE_REPLY",
            Self::ReplyDetail => "REPLY_DETAIL",
            Self::LikeKey => "LIKE_KEY",
            Self::LikeDetail => "LIKE_DETAIL",
            Self::ToggleLike => "TOGGLE_LIKE",
            Self::RegisterUser => "REGISTER_USER",
            Self::RegisteredUser => "REGISTERED_USER",
            Self::UserLogin => "USER_LOGIN",
            Self::AuthCredentials => "AUTH_CREDENTIALS",
            Self::NewAuth => "NEW_AUTH",
            Self::RefreshToken => "REFRESH_TOKEN",
        }
    }
}

/// Why a payload was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationKind {
    /// A required field is absent (or an empty string).
    MissingProperty,
    /// A field is present but carries the wrong JSON type.
    DataTypeMismatch,
    UsernameLimitChar,
    UsernameRestrictedCharacter,
}

impl ValidationKind {
    pub const fn code(self) -> &'static str {
        match self {
            Self::MissingProperty => "NOT_CONTAIN_NEEDED_PROPERTY",
            Self::DataTypeMismatch => "NOT_MEET_DATA_TYPE_SPECIFICATION",
            Self::UsernameLimitChar => "USERNAME_LIMIT_CHAR",
            Self::UsernameRestrictedCharacter => "USERNAME_CONTAIN_RESTRICTED_CHARACTER",
        }
    }
}

/// Raised synchronously while constructing an entity.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{}.{}", .entity.code(), .kind.code())]
pub struct ValidationError {
    pub entity: Entity,
    pub kind: ValidationKind,
}

impl ValidationError {
    pub const fn new(entity: Entity, kind: ValidationKind) -> Self {
        Self { entity, kind }
    }

    pub const fn missing(entity: Entity) -> Self {
        Self::new(entity, ValidationKind::MissingProperty)
    }

    pub const fn data_type(entity: Entity) -> Self {
        Self::new(entity, ValidationKind::DataTypeMismatch)
    }
}

/// The kind of stored record an operation referred to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    User,
    Thread,
    Comment,
    Reply,
    Like,
    RefreshToken,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::User => "user",
            Self::Thread => "thread",
            Self::Comment => "comment",
            Self::Reply => "reply",
            Self::Like => "like",
            Self::RefreshToken => "refresh token",
        })
    }
}

/// The primary error type for every port and use case.
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed or incomplete payload
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A client-caused rule violation (e.g. username taken, token unknown)
    #[error("invariant violated: {0}")]
    Invariant(String),

    /// Referenced thread, comment, reply or like is absent
    #[error("{0} not found")]
    NotFound(Resource),

    /// Caller is not the owner of the resource
    #[error("not the owner of this {0}")]
    Forbidden(Resource),

    /// Credentials or bearer token rejected
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The store refused a duplicate row (e.g. concurrent like toggles)
    #[error("conflict: {0}")]
    Conflict(String),

    /// Infrastructure failure (e.g. DB down, hashing pool gone)
    #[error("internal service error: {0}")]
    Internal(String),
}

/// A specialized Result type for forum logic.
pub type Result<T> = std::result::Result<T, AppError>;
