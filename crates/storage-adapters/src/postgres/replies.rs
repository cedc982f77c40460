use async_trait::async_trait;
use domains::{AddReply, AddedReply, AppError, ReplyDetail, ReplyRepository, Resource, Result};
use sqlx::postgres::PgRow;
use sqlx::Row;

use super::{db_error, insert_error, PgStore};
use crate::support::prefixed_id;

fn reply_detail(row: &PgRow) -> Result<ReplyDetail> {
    Ok(ReplyDetail::new(
        row.get::<String, _>("id"),
        row.get::<String, _>("username"),
        row.get::<String, _>("date"),
        row.get::<String, _>("content"),
        row.get::<bool, _>("is_deleted"),
    )?)
}

#[async_trait]
impl ReplyRepository for PgStore {
    async fn add_reply(&self, reply: AddReply) -> Result<AddedReply> {
        let id = prefixed_id("reply", self.ids.as_ref());

        let row = sqlx::query(
            "INSERT INTO replies (id, content, comment_id, owner_id, is_deleted, date) \
             VALUES ($1, $2, $3, $4, FALSE, $5) \
             RETURNING id, content, owner_id, date",
        )
        .bind(&id)
        .bind(reply.content())
        .bind(reply.comment_id())
        .bind(reply.owner_id())
        .bind(self.clock.utc_now_string())
        .fetch_one(&self.pool)
        .await
        .map_err(insert_error(Resource::Comment))?;

        Ok(AddedReply::new(
            row.get::<String, _>("id"),
            row.get::<String, _>("content"),
            row.get::<String, _>("owner_id"),
            row.get::<String, _>("date"),
        )?)
    }

    async fn get_reply_by_id(&self, id: &str) -> Result<ReplyDetail> {
        let row = sqlx::query(
            "SELECT r.id, r.content, r.is_deleted, r.date, u.username FROM replies r \
             JOIN users u ON r.owner_id = u.id \
             WHERE r.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?
        .ok_or(AppError::NotFound(Resource::Reply))?;

        reply_detail(&row)
    }

    async fn get_replies_by_comment_id(&self, comment_id: &str) -> Result<Vec<ReplyDetail>> {
        sqlx::query(
            "SELECT r.id, r.content, r.is_deleted, r.date, u.username FROM replies r \
             JOIN users u ON r.owner_id = u.id \
             WHERE r.comment_id = $1 \
             ORDER BY r.date ASC, r.seq ASC",
        )
        .bind(comment_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?
        .iter()
        .map(reply_detail)
        .collect()
    }

    async fn verify_reply_owner(&self, reply_id: &str, owner_id: &str) -> Result<()> {
        let owner: String = sqlx::query("SELECT owner_id FROM replies WHERE id = $1")
            .bind(reply_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?
            .ok_or(AppError::NotFound(Resource::Reply))?
            .get("owner_id");

        if owner != owner_id {
            return Err(AppError::Forbidden(Resource::Reply));
        }
        Ok(())
    }

    async fn delete_reply_by_id(&self, id: &str) -> Result<()> {
        let result = sqlx::query("UPDATE replies SET is_deleted = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(Resource::Reply));
        }
        tracing::debug!(reply_id = %id, "reply soft-deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::postgres::testing::{frozen_store, store, user};
    use domains::{AddComment, CommentRepository, CreateThread, ThreadRepository};

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn reply_lifecycle() {
        let store = store().await;
        let (owner, _) = user(&store).await;
        let thread = store
            .add_thread(CreateThread::new("t", "b", owner.as_str()).unwrap())
            .await
            .unwrap();
        let comment = store
            .add_comment(AddComment::new("c", thread.id(), owner.as_str()).unwrap())
            .await
            .unwrap();

        let reply = store
            .add_reply(AddReply::new("r", thread.id(), comment.id(), owner.as_str()).unwrap())
            .await
            .unwrap();
        store.verify_reply_owner(reply.id(), &owner).await.unwrap();
        store.delete_reply_by_id(reply.id()).await.unwrap();

        let fetched = store.get_reply_by_id(reply.id()).await.unwrap();
        assert!(fetched.is_deleted());
        assert_eq!(store.get_replies_by_comment_id(comment.id()).await.unwrap().len(), 1);

        assert!(matches!(
            store.delete_reply_by_id("reply-404").await,
            Err(AppError::NotFound(Resource::Reply))
        ));
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn same_date_replies_keep_insertion_order() {
        let store = frozen_store().await;
        let (owner, _) = user(&store).await;
        let thread = store
            .add_thread(CreateThread::new("t", "b", owner.as_str()).unwrap())
            .await
            .unwrap();
        let comment = store
            .add_comment(AddComment::new("c", thread.id(), owner.as_str()).unwrap())
            .await
            .unwrap();

        let mut ids = Vec::new();
        for content in ["first", "second", "third", "fourth"] {
            let added = store
                .add_reply(AddReply::new(content, thread.id(), comment.id(), owner.as_str()).unwrap())
                .await
                .unwrap();
            ids.push(added.id().to_owned());
        }

        let listed: Vec<String> = store
            .get_replies_by_comment_id(comment.id())
            .await
            .unwrap()
            .iter()
            .map(|r| r.id().to_owned())
            .collect();
        assert_eq!(listed, ids);
    }
}
