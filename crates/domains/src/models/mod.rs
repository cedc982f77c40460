//! # Domain Models
//!
//! Immutable value objects. Each is built through a fallible constructor that
//! checks presence first and (for JSON payloads) types second.

pub mod authentications;
pub mod comments;
pub mod likes;
pub mod replies;
pub mod threads;
pub mod users;

pub use authentications::{AuthCredentials, NewAuth, RefreshToken};
pub use comments::{
    AddComment, AddedComment, CommentDetail, CommentDetailWithReplies, DeleteComment,
    DELETED_COMMENT_CONTENT,
};
pub use likes::{LikeDetail, LikeKey, ToggleLike};
pub use replies::{AddReply, AddedReply, DeleteReply, ReplyDetail, DELETED_REPLY_CONTENT};
pub use threads::{CreateThread, CreatedThread, ThreadDetail, ThreadDetailWithComments};
pub use users::{RegisterUser, RegisteredUser, UserLogin};
