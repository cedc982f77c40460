//! Comment use cases.

use std::sync::Arc;

use domains::{
    AddComment, AddedComment, CommentRepository, DeleteComment, Result, ThreadRepository,
};

pub struct AddCommentUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl AddCommentUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
        }
    }

    /// The thread must exist before anything is written.
    #[tracing::instrument(name = "add_comment", skip_all, fields(thread_id = %comment.thread_id()))]
    pub async fn execute(&self, comment: AddComment) -> Result<AddedComment> {
        self.thread_repository
            .get_thread_by_id(comment.thread_id())
            .await?;

        self.comment_repository.add_comment(comment).await
    }
}

pub struct DeleteCommentUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl DeleteCommentUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
        }
    }

    /// Thread existence, then ownership, then the soft delete.
    #[tracing::instrument(
        name = "delete_comment",
        skip_all,
        fields(thread_id = %request.thread_id(), comment_id = %request.comment_id())
    )]
    pub async fn execute(&self, request: DeleteComment) -> Result<()> {
        self.thread_repository
            .get_thread_by_id(request.thread_id())
            .await?;
        self.comment_repository
            .verify_comment_owner(request.comment_id(), request.owner_id())
            .await?;
        self.comment_repository
            .delete_comment_by_id(request.comment_id())
            .await
    }
}
