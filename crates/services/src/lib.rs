//! Application use cases. Each one orchestrates ports from `domains` and
//! holds no state of its own.

pub mod authentications;
pub mod comments;
pub mod likes;
pub mod replies;
pub mod threads;
pub mod users;

use std::sync::Arc;

use domains::{
    AuthenticationRepository, AuthenticationTokenManager, CommentRepository, LikeRepository,
    PasswordHash, ReplyRepository, ThreadRepository, UserRepository,
};

pub use authentications::{LoginUserUseCase, LogoutUserUseCase, RefreshAuthenticationUseCase};
pub use comments::{AddCommentUseCase, DeleteCommentUseCase};
pub use likes::LikeCommentUseCase;
pub use replies::{AddReplyUseCase, DeleteReplyUseCase};
pub use threads::{AddThreadUseCase, GetThreadByIdUseCase};
pub use users::AddUserUseCase;

/// The adapters a running server is wired with.
#[derive(Clone)]
pub struct Ports {
    pub threads: Arc<dyn ThreadRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub replies: Arc<dyn ReplyRepository>,
    pub likes: Arc<dyn LikeRepository>,
    pub users: Arc<dyn UserRepository>,
    pub authentications: Arc<dyn AuthenticationRepository>,
    pub password_hash: Arc<dyn PasswordHash>,
    pub token_manager: Arc<dyn AuthenticationTokenManager>,
}

/// Every use case, built once from a set of [`Ports`].
pub struct ForumServices {
    pub add_thread: AddThreadUseCase,
    pub get_thread: GetThreadByIdUseCase,
    pub add_comment: AddCommentUseCase,
    pub delete_comment: DeleteCommentUseCase,
    pub add_reply: AddReplyUseCase,
    pub delete_reply: DeleteReplyUseCase,
    pub like_comment: LikeCommentUseCase,
    pub add_user: AddUserUseCase,
    pub login_user: LoginUserUseCase,
    pub refresh_authentication: RefreshAuthenticationUseCase,
    pub logout_user: LogoutUserUseCase,
}

impl ForumServices {
    pub fn new(ports: Ports) -> Self {
        let Ports {
            threads,
            comments,
            replies,
            likes,
            users,
            authentications,
            password_hash,
            token_manager,
        } = ports;

        Self {
            add_thread: AddThreadUseCase::new(threads.clone()),
            get_thread: GetThreadByIdUseCase::new(
                threads.clone(),
                comments.clone(),
                replies.clone(),
                likes.clone(),
            ),
            add_comment: AddCommentUseCase::new(threads.clone(), comments.clone()),
            delete_comment: DeleteCommentUseCase::new(threads.clone(), comments.clone()),
            add_reply: AddReplyUseCase::new(threads.clone(), comments.clone(), replies.clone()),
            delete_reply: DeleteReplyUseCase::new(threads.clone(), comments.clone(), replies),
            like_comment: LikeCommentUseCase::new(threads, comments, likes),
            add_user: AddUserUseCase::new(users.clone(), password_hash.clone()),
            login_user: LoginUserUseCase::new(
                users,
                authentications.clone(),
                token_manager.clone(),
                password_hash,
            ),
            refresh_authentication: RefreshAuthenticationUseCase::new(
                authentications.clone(),
                token_manager,
            ),
            logout_user: LogoutUserUseCase::new(authentications),
        }
    }
}
