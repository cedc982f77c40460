//! Reply use cases. Both walk the `thread -> comment` chain first and stop at
//! the first missing ancestor.

use std::sync::Arc;

use domains::{
    AddReply, AddedReply, CommentRepository, DeleteReply, ReplyRepository, Result,
    ThreadRepository,
};

pub struct AddReplyUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    reply_repository: Arc<dyn ReplyRepository>,
}

impl AddReplyUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        reply_repository: Arc<dyn ReplyRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
            reply_repository,
        }
    }

    #[tracing::instrument(
        name = "add_reply",
        skip_all,
        fields(thread_id = %reply.thread_id(), comment_id = %reply.comment_id())
    )]
    pub async fn execute(&self, reply: AddReply) -> Result<AddedReply> {
        self.thread_repository
            .get_thread_by_id(reply.thread_id())
            .await?;
        self.comment_repository
            .get_comment_by_id(reply.comment_id())
            .await?;

        self.reply_repository.add_reply(reply).await
    }
}

pub struct DeleteReplyUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    reply_repository: Arc<dyn ReplyRepository>,
}

impl DeleteReplyUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        reply_repository: Arc<dyn ReplyRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
            reply_repository,
        }
    }

    #[tracing::instrument(name = "delete_reply", skip_all, fields(reply_id = %request.reply_id()))]
    pub async fn execute(&self, request: DeleteReply) -> Result<()> {
        self.thread_repository
            .get_thread_by_id(request.thread_id())
            .await?;
        self.comment_repository
            .get_comment_by_id(request.comment_id())
            .await?;
        self.reply_repository
            .verify_reply_owner(request.reply_id(), request.owner_id())
            .await?;
        self.reply_repository
            .delete_reply_by_id(request.reply_id())
            .await
    }
}
