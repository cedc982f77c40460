use async_trait::async_trait;
use domains::{AddReply, AddedReply, AppError, ReplyDetail, ReplyRepository, Resource, Result};

use super::{children_of, soft_delete, verify_post_owner, MemoryStore, PostRow};
use crate::support::prefixed_id;

impl MemoryStore {
    fn reply_detail(&self, row: PostRow) -> Result<ReplyDetail> {
        let username = self.username_of(&row.owner_id)?;
        Ok(ReplyDetail::new(
            row.id,
            username,
            row.date,
            row.content,
            row.is_deleted,
        )?)
    }
}

#[async_trait]
impl ReplyRepository for MemoryStore {
    async fn add_reply(&self, reply: AddReply) -> Result<AddedReply> {
        if !self.comments.contains_key(reply.comment_id()) {
            return Err(AppError::NotFound(Resource::Comment));
        }
        self.require_user(reply.owner_id())?;

        let row = PostRow {
            id: prefixed_id("reply", self.ids.as_ref()),
            content: reply.content().to_owned(),
            parent_id: reply.comment_id().to_owned(),
            owner_id: reply.owner_id().to_owned(),
            is_deleted: false,
            date: self.clock.utc_now_string(),
            seq: self.next_seq(),
        };
        let added = AddedReply::new(
            row.id.as_str(),
            row.content.as_str(),
            row.owner_id.as_str(),
            row.date.as_str(),
        )?;
        tracing::debug!(reply_id = %row.id, "reply stored");
        self.replies.insert(row.id.clone(), row);

        Ok(added)
    }

    async fn get_reply_by_id(&self, id: &str) -> Result<ReplyDetail> {
        let row = self
            .replies
            .get(id)
            .map(|row| row.value().clone())
            .ok_or(AppError::NotFound(Resource::Reply))?;
        self.reply_detail(row)
    }

    async fn get_replies_by_comment_id(&self, comment_id: &str) -> Result<Vec<ReplyDetail>> {
        children_of(&self.replies, comment_id)
            .into_iter()
            .map(|row| self.reply_detail(row))
            .collect()
    }

    async fn verify_reply_owner(&self, reply_id: &str, owner_id: &str) -> Result<()> {
        verify_post_owner(&self.replies, Resource::Reply, reply_id, owner_id)
    }

    async fn delete_reply_by_id(&self, id: &str) -> Result<()> {
        soft_delete(&self.replies, Resource::Reply, id)?;
        tracing::debug!(reply_id = %id, "reply soft-deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::testing::{store, user};
    use domains::{
        AddComment, CommentRepository, CreateThread, ThreadRepository, DELETED_REPLY_CONTENT,
    };

    /// Returns `(owner id, comment id)`.
    async fn seeded(store: &MemoryStore) -> (String, String) {
        let owner = user(store, "dicoding").await;
        let thread = store
            .add_thread(CreateThread::new("title", "body", owner.as_str()).unwrap())
            .await
            .unwrap();
        let comment = store
            .add_comment(AddComment::new("hi", thread.id(), owner.as_str()).unwrap())
            .await
            .unwrap();
        (owner, comment.id().to_owned())
    }

    #[tokio::test]
    async fn replies_are_scoped_to_their_comment_and_ordered() {
        let store = store();
        let (owner, comment_id) = seeded(&store).await;

        let r1 = store
            .add_reply(AddReply::new("one", "thread-x", comment_id.as_str(), owner.as_str()).unwrap())
            .await
            .unwrap();
        let r2 = store
            .add_reply(AddReply::new("two", "thread-x", comment_id.as_str(), owner.as_str()).unwrap())
            .await
            .unwrap();
        store.delete_reply_by_id(r2.id()).await.unwrap();

        let replies = store.get_replies_by_comment_id(&comment_id).await.unwrap();
        let ids: Vec<_> = replies.iter().map(ReplyDetail::id).collect();
        assert_eq!(ids, [r1.id(), r2.id()]);
        assert_eq!(replies[0].content(), "one");
        assert_eq!(replies[1].content(), DELETED_REPLY_CONTENT);

        assert!(store.get_replies_by_comment_id("comment-other").await.unwrap().is_empty());

        let fetched = store.get_reply_by_id(r1.id()).await.unwrap();
        assert_eq!(fetched.username(), "dicoding");
    }

    #[tokio::test]
    async fn reply_needs_an_existing_comment() {
        let store = store();
        let (owner, _) = seeded(&store).await;

        let err = store
            .add_reply(AddReply::new("x", "thread-x", "comment-404", owner.as_str()).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(Resource::Comment)));
    }

    #[tokio::test]
    async fn reply_owner_checks() {
        let store = store();
        let (owner, comment_id) = seeded(&store).await;
        let reply = store
            .add_reply(AddReply::new("x", "thread-x", comment_id.as_str(), owner.as_str()).unwrap())
            .await
            .unwrap();

        store.verify_reply_owner(reply.id(), &owner).await.unwrap();
        assert!(matches!(
            store.verify_reply_owner(reply.id(), "user-other").await,
            Err(AppError::Forbidden(Resource::Reply))
        ));
        assert!(matches!(
            store.get_reply_by_id("reply-404").await,
            Err(AppError::NotFound(Resource::Reply))
        ));
    }
}
