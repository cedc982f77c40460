use async_trait::async_trait;
use domains::{AppError, LikeDetail, LikeKey, LikeRepository, Resource, Result};
use sqlx::Row;

use super::{db_error, insert_error, PgStore};

#[async_trait]
impl LikeRepository for PgStore {
    async fn add_like(&self, key: &LikeKey) -> Result<LikeDetail> {
        let row = sqlx::query(
            "INSERT INTO likes (comment_id, user_id, date) VALUES ($1, $2, $3) \
             RETURNING comment_id, user_id, date",
        )
        .bind(key.comment_id())
        .bind(key.user_id())
        .bind(self.clock.utc_now_string())
        .fetch_one(&self.pool)
        .await
        .map_err(insert_error(Resource::Comment))?;

        Ok(LikeDetail::new(
            row.get::<String, _>("comment_id"),
            row.get::<String, _>("user_id"),
            row.get::<String, _>("date"),
        )?)
    }

    async fn delete_like(&self, key: &LikeKey) -> Result<()> {
        let result = sqlx::query("DELETE FROM likes WHERE comment_id = $1 AND user_id = $2")
            .bind(key.comment_id())
            .bind(key.user_id())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(Resource::Like));
        }
        Ok(())
    }

    async fn check_like(&self, key: &LikeKey) -> Result<bool> {
        let row = sqlx::query("SELECT 1 FROM likes WHERE comment_id = $1 AND user_id = $2")
            .bind(key.comment_id())
            .bind(key.user_id())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(row.is_some())
    }

    async fn get_likes_by_comment_id(&self, comment_id: &str) -> Result<Vec<LikeDetail>> {
        sqlx::query("SELECT comment_id, user_id, date FROM likes WHERE comment_id = $1")
            .bind(comment_id)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?
            .iter()
            .map(|row| {
                LikeDetail::new(
                    row.get::<String, _>("comment_id"),
                    row.get::<String, _>("user_id"),
                    row.get::<String, _>("date"),
                )
                .map_err(AppError::from)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::postgres::testing::{store, user};
    use domains::{AddComment, CommentRepository, CreateThread, ThreadRepository};

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn like_uniqueness_and_removal() {
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
        let key = LikeKey::new(comment.id(), owner.as_str()).unwrap();

        store.add_like(&key).await.unwrap();
        assert!(store.check_like(&key).await.unwrap());
        assert!(matches!(store.add_like(&key).await, Err(AppError::Conflict(_))));

        store.delete_like(&key).await.unwrap();
        assert!(!store.check_like(&key).await.unwrap());
        assert!(matches!(
            store.delete_like(&key).await,
            Err(AppError::NotFound(Resource::Like))
        ));
    }
}
