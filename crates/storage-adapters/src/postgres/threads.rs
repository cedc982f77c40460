use async_trait::async_trait;
use domains::{
    AppError, CreateThread, CreatedThread, Resource, Result, ThreadDetail, ThreadRepository,
};
use sqlx::Row;

use super::{db_error, insert_error, PgStore};
use crate::support::prefixed_id;

#[async_trait]
impl ThreadRepository for PgStore {
    async fn add_thread(&self, thread: CreateThread) -> Result<CreatedThread> {
        let id = prefixed_id("thread", self.ids.as_ref());

        let row = sqlx::query(
            "INSERT INTO threads (id, title, body, owner, date) VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, title, owner",
        )
        .bind(&id)
        .bind(thread.title())
        .bind(thread.body())
        .bind(thread.owner())
        .bind(self.clock.utc_now_string())
        .fetch_one(&self.pool)
        .await
        .map_err(insert_error(Resource::User))?;

        Ok(CreatedThread::new(
            row.get::<String, _>("id"),
            row.get::<String, _>("title"),
            row.get::<String, _>("owner"),
        )?)
    }

    async fn get_thread_by_id(&self, id: &str) -> Result<ThreadDetail> {
        let row = sqlx::query(
            "SELECT t.id, t.title, t.body, t.date, u.username FROM threads t \
             JOIN users u ON t.owner = u.id \
             WHERE t.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?
        .ok_or(AppError::NotFound(Resource::Thread))?;

        Ok(ThreadDetail::new(
            row.get::<String, _>("id"),
            row.get::<String, _>("title"),
            row.get::<String, _>("body"),
            row.get::<String, _>("date"),
            row.get::<String, _>("username"),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::postgres::testing::{store, user};

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn add_and_get_thread() {
        let store = store().await;
        let (owner, username) = user(&store).await;

        let created = store
            .add_thread(CreateThread::new("Test Title", "test body", owner.as_str()).unwrap())
            .await
            .unwrap();
        assert!(created.id().starts_with("thread-"));

        let detail = store.get_thread_by_id(created.id()).await.unwrap();
        assert_eq!(detail.username(), username);
        assert_eq!(detail.body(), "test body");

        assert!(matches!(
            store.get_thread_by_id("thread-404").await,
            Err(AppError::NotFound(Resource::Thread))
        ));
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn unknown_owner_is_reported_as_missing_user() {
        let store = store().await;
        let err = store
            .add_thread(CreateThread::new("t", "b", "user-404").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(Resource::User)));
    }
}
