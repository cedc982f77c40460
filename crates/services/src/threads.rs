//! Thread use cases: opening a thread and assembling its nested view.

use std::sync::Arc;

use domains::{
    CommentDetail, CommentDetailWithReplies, CommentRepository, CreateThread, CreatedThread,
    LikeRepository, ReplyRepository, Result, ThreadDetailWithComments, ThreadRepository,
};
use futures::future::try_join_all;

pub struct AddThreadUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
}

impl AddThreadUseCase {
    pub fn new(thread_repository: Arc<dyn ThreadRepository>) -> Self {
        Self { thread_repository }
    }

    #[tracing::instrument(name = "add_thread", skip_all, fields(owner = %thread.owner()))]
    pub async fn execute(&self, thread: CreateThread) -> Result<CreatedThread> {
        self.thread_repository.add_thread(thread).await
    }
}

/// Builds `thread -> comments -> replies` with like counts.
pub struct GetThreadByIdUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    reply_repository: Arc<dyn ReplyRepository>,
    like_repository: Arc<dyn LikeRepository>,
}

impl GetThreadByIdUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        reply_repository: Arc<dyn ReplyRepository>,
        like_repository: Arc<dyn LikeRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
            reply_repository,
            like_repository,
        }
    }

    #[tracing::instrument(name = "get_thread_by_id", skip(self))]
    pub async fn execute(&self, thread_id: &str) -> Result<ThreadDetailWithComments> {
        let thread = self.thread_repository.get_thread_by_id(thread_id).await?;
        let comments = self
            .comment_repository
            .get_comments_by_thread_id(thread_id)
            .await?;

        // Sub-fetches run concurrently; try_join_all yields results in input
        // order, whatever order they complete in.
        let comments = try_join_all(
            comments
                .into_iter()
                .map(|comment| self.with_replies_and_likes(comment)),
        )
        .await?;

        tracing::debug!(comments = comments.len(), "thread assembled");
        Ok(ThreadDetailWithComments::new(thread, comments))
    }

    async fn with_replies_and_likes(
        &self,
        comment: CommentDetail,
    ) -> Result<CommentDetailWithReplies> {
        let (replies, likes) = tokio::try_join!(
            self.reply_repository.get_replies_by_comment_id(comment.id()),
            self.like_repository.get_likes_by_comment_id(comment.id()),
        )?;

        Ok(CommentDetailWithReplies::new(comment, replies, likes.len()))
    }
}
