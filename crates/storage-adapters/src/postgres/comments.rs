use async_trait::async_trait;
use domains::{
    AddComment, AddedComment, AppError, CommentDetail, CommentRepository, Resource, Result,
};
use sqlx::postgres::PgRow;
use sqlx::Row;

use super::{db_error, insert_error, PgStore};
use crate::support::prefixed_id;

fn comment_detail(row: &PgRow) -> Result<CommentDetail> {
    Ok(CommentDetail::new(
        row.get::<String, _>("id"),
        row.get::<String, _>("username"),
        row.get::<String, _>("date"),
        row.get::<String, _>("content"),
        row.get::<bool, _>("is_deleted"),
    )?)
}

#[async_trait]
impl CommentRepository for PgStore {
    async fn add_comment(&self, comment: AddComment) -> Result<AddedComment> {
        let id = prefixed_id("comment", self.ids.as_ref());

        let row = sqlx::query(
            "INSERT INTO comments (id, content, thread_id, owner_id, is_deleted, date) \
             VALUES ($1, $2, $3, $4, FALSE, $5) \
             RETURNING id, content, owner_id, date",
        )
        .bind(&id)
        .bind(comment.content())
        .bind(comment.thread_id())
        .bind(comment.owner_id())
        .bind(self.clock.utc_now_string())
        .fetch_one(&self.pool)
        .await
        .map_err(insert_error(Resource::Thread))?;

        Ok(AddedComment::new(
            row.get::<String, _>("id"),
            row.get::<String, _>("content"),
            row.get::<String, _>("owner_id"),
            row.get::<String, _>("date"),
        )?)
    }

    async fn get_comment_by_id(&self, id: &str) -> Result<CommentDetail> {
        let row = sqlx::query(
            "SELECT c.id, c.content, c.is_deleted, c.date, u.username FROM comments c \
             JOIN users u ON c.owner_id = u.id \
             WHERE c.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?
        .ok_or(AppError::NotFound(Resource::Comment))?;

        comment_detail(&row)
    }

    async fn get_comments_by_thread_id(&self, thread_id: &str) -> Result<Vec<CommentDetail>> {
        sqlx::query(
            "SELECT c.id, c.content, c.is_deleted, c.date, u.username FROM comments c \
             JOIN users u ON c.owner_id = u.id \
             WHERE c.thread_id = $1 \
             ORDER BY c.date ASC, c.seq ASC",
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?
        .iter()
        .map(comment_detail)
        .collect()
    }

    async fn verify_comment_owner(&self, comment_id: &str, owner_id: &str) -> Result<()> {
        let owner: String = sqlx::query("SELECT owner_id FROM comments WHERE id = $1")
            .bind(comment_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?
            .ok_or(AppError::NotFound(Resource::Comment))?
            .get("owner_id");

        if owner != owner_id {
            return Err(AppError::Forbidden(Resource::Comment));
        }
        Ok(())
    }

    async fn delete_comment_by_id(&self, id: &str) -> Result<()> {
        let result = sqlx::query("UPDATE comments SET is_deleted = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(Resource::Comment));
        }
        tracing::debug!(comment_id = %id, "comment soft-deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::postgres::testing::{frozen_store, store, user};
    use domains::{CreateThread, ThreadRepository, DELETED_COMMENT_CONTENT};

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn comment_lifecycle() {
        let store = store().await;
        let (owner, username) = user(&store).await;
        let (other, _) = user(&store).await;
        let thread = store
            .add_thread(CreateThread::new("t", "b", owner.as_str()).unwrap())
            .await
            .unwrap();

        let added = store
            .add_comment(AddComment::new("hello", thread.id(), owner.as_str()).unwrap())
            .await
            .unwrap();
        assert_eq!(added.owner_id(), owner);

        assert!(matches!(
            store.verify_comment_owner(added.id(), &other).await,
            Err(AppError::Forbidden(Resource::Comment))
        ));
        store.verify_comment_owner(added.id(), &owner).await.unwrap();
        store.delete_comment_by_id(added.id()).await.unwrap();

        let listed = store.get_comments_by_thread_id(thread.id()).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].username(), username);
        assert_eq!(listed[0].content(), DELETED_COMMENT_CONTENT);
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn comment_on_missing_thread_is_not_found() {
        let store = store().await;
        let (owner, _) = user(&store).await;

        let err = store
            .add_comment(AddComment::new("hello", "thread-404", owner.as_str()).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(Resource::Thread)));
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn same_date_comments_keep_insertion_order() {
        let store = frozen_store().await;
        let (owner, _) = user(&store).await;
        let thread = store
            .add_thread(CreateThread::new("t", "b", owner.as_str()).unwrap())
            .await
            .unwrap();

        let mut ids = Vec::new();
        for content in ["first", "second", "third", "fourth"] {
            let added = store
                .add_comment(AddComment::new(content, thread.id(), owner.as_str()).unwrap())
                .await
                .unwrap();
            ids.push(added.id().to_owned());
        }

        let listed: Vec<String> = store
            .get_comments_by_thread_id(thread.id())
            .await
            .unwrap()
            .iter()
            .map(|c| c.id().to_owned())
            .collect();
        assert_eq!(listed, ids);
    }
}
