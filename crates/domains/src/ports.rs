//! # Core Traits (Ports)
//!
//! Every storage, security and clock backend must implement these traits to be
//! wired into the services. Missing an operation is a compile error.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{
    AddComment, AddReply, AddedComment, AddedReply, AuthCredentials, CommentDetail, CreateThread,
    CreatedThread, LikeDetail, LikeKey, RegisterUser, RegisteredUser, ReplyDetail, ThreadDetail,
};

/// Persistence contract for threads.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    async fn add_thread(&self, thread: CreateThread) -> Result<CreatedThread>;

    /// Fails with `NotFound(Thread)` when absent.
    async fn get_thread_by_id(&self, id: &str) -> Result<ThreadDetail>;
}

/// Persistence contract for comments.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn add_comment(&self, comment: AddComment) -> Result<AddedComment>;

    /// Fails with `NotFound(Comment)` when absent.
    async fn get_comment_by_id(&self, id: &str) -> Result<CommentDetail>;

    /// Ascending by date, soft-deleted rows included (masked).
    async fn get_comments_by_thread_id(&self, thread_id: &str) -> Result<Vec<CommentDetail>>;

    /// `NotFound(Comment)` if absent, `Forbidden(Comment)` if owned by someone else.
    async fn verify_comment_owner(&self, comment_id: &str, owner_id: &str) -> Result<()>;

    /// Soft delete. `NotFound(Comment)` if no row was affected.
    async fn delete_comment_by_id(&self, id: &str) -> Result<()>;
}

/// Persistence contract for replies.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ReplyRepository: Send + Sync {
    async fn add_reply(&self, reply: AddReply) -> Result<AddedReply>;

    async fn get_reply_by_id(&self, id: &str) -> Result<ReplyDetail>;

    /// Ascending by date, soft-deleted rows included (masked).
    async fn get_replies_by_comment_id(&self, comment_id: &str) -> Result<Vec<ReplyDetail>>;

    async fn verify_reply_owner(&self, reply_id: &str, owner_id: &str) -> Result<()>;

    async fn delete_reply_by_id(&self, id: &str) -> Result<()>;
}

/// Persistence contract for likes.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait LikeRepository: Send + Sync {
    async fn add_like(&self, key: &LikeKey) -> Result<LikeDetail>;

    /// Hard delete. `NotFound(Like)` if no row was affected.
    async fn delete_like(&self, key: &LikeKey) -> Result<()>;

    /// Absence is an answer, not an error.
    async fn check_like(&self, key: &LikeKey) -> Result<bool>;

    /// Order is unspecified; callers only count.
    async fn get_likes_by_comment_id(&self, comment_id: &str) -> Result<Vec<LikeDetail>>;
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// `Invariant` when the username is already taken.
    async fn verify_available_username(&self, username: &str) -> Result<()>;

    /// `user.password()` must already be hashed.
    async fn add_user(&self, user: RegisterUser) -> Result<RegisteredUser>;

    async fn get_password_by_username(&self, username: &str) -> Result<String>;

    async fn get_id_by_username(&self, username: &str) -> Result<String>;
}

/// Storage of issued refresh tokens.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait AuthenticationRepository: Send + Sync {
    async fn add_token(&self, token: &str) -> Result<()>;

    /// `Invariant` when the token was never stored (or already revoked).
    async fn check_availability_token(&self, token: &str) -> Result<()>;

    async fn delete_token(&self, token: &str) -> Result<()>;
}

/// Password hashing contract.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait PasswordHash: Send + Sync {
    async fn hash(&self, password: &str) -> Result<String>;

    /// `Unauthorized` on mismatch.
    async fn compare_password(&self, password: &str, hashed: &str) -> Result<()>;
}

/// Token issuance and verification contract.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait AuthenticationTokenManager: Send + Sync {
    fn create_access_token(&self, credentials: &AuthCredentials) -> Result<String>;

    fn create_refresh_token(&self, credentials: &AuthCredentials) -> Result<String>;

    /// `Invariant` when the signature or expiry does not check out.
    fn verify_refresh_token(&self, token: &str) -> Result<AuthCredentials>;

    /// `Unauthorized` when the signature or expiry does not check out.
    fn verify_access_token(&self, token: &str) -> Result<AuthCredentials>;
}

/// Time source, so nothing reads the system clock directly.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait DateProvider: Send + Sync {
    /// ISO-8601 UTC, millisecond precision (e.g. `2021-08-08T07:19:09.775Z`).
    fn utc_now_string(&self) -> String;
}

/// Source of the random suffix in `{type}-{id}` identifiers.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}
