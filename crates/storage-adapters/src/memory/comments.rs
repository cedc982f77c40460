use async_trait::async_trait;
use domains::{
    AddComment, AddedComment, AppError, CommentDetail, CommentRepository, Resource, Result,
};

use super::{children_of, soft_delete, verify_post_owner, MemoryStore, PostRow};
use crate::support::prefixed_id;

impl MemoryStore {
    fn comment_detail(&self, row: PostRow) -> Result<CommentDetail> {
        let username = self.username_of(&row.owner_id)?;
        Ok(CommentDetail::new(
            row.id,
            username,
            row.date,
            row.content,
            row.is_deleted,
        )?)
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn add_comment(&self, comment: AddComment) -> Result<AddedComment> {
        if !self.threads.contains_key(comment.thread_id()) {
            return Err(AppError::NotFound(Resource::Thread));
        }
        self.require_user(comment.owner_id())?;

        let row = PostRow {
            id: prefixed_id("comment", self.ids.as_ref()),
            content: comment.content().to_owned(),
            parent_id: comment.thread_id().to_owned(),
            owner_id: comment.owner_id().to_owned(),
            is_deleted: false,
            date: self.clock.utc_now_string(),
            seq: self.next_seq(),
        };
        let added = AddedComment::new(
            row.id.as_str(),
            row.content.as_str(),
            row.owner_id.as_str(),
            row.date.as_str(),
        )?;
        tracing::debug!(comment_id = %row.id, "comment stored");
        self.comments.insert(row.id.clone(), row);

        Ok(added)
    }

    async fn get_comment_by_id(&self, id: &str) -> Result<CommentDetail> {
        let row = self
            .comments
            .get(id)
            .map(|row| row.value().clone())
            .ok_or(AppError::NotFound(Resource::Comment))?;
        self.comment_detail(row)
    }

    async fn get_comments_by_thread_id(&self, thread_id: &str) -> Result<Vec<CommentDetail>> {
        children_of(&self.comments, thread_id)
            .into_iter()
            .map(|row| self.comment_detail(row))
            .collect()
    }

    async fn verify_comment_owner(&self, comment_id: &str, owner_id: &str) -> Result<()> {
        verify_post_owner(&self.comments, Resource::Comment, comment_id, owner_id)
    }

    async fn delete_comment_by_id(&self, id: &str) -> Result<()> {
        soft_delete(&self.comments, Resource::Comment, id)?;
        tracing::debug!(comment_id = %id, "comment soft-deleted");
        Ok(())
    }
}
