use async_trait::async_trait;
use domains::{AppError, AuthenticationRepository, Result};

use super::{db_error, PgStore};

#[async_trait]
impl AuthenticationRepository for PgStore {
    async fn add_token(&self, token: &str) -> Result<()> {
        sqlx::query("INSERT INTO authentications (token) VALUES ($1)")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(())
    }

    async fn check_availability_token(&self, token: &str) -> Result<()> {
        sqlx::query("SELECT token FROM authentications WHERE token = $1")
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?
            .map(|_| ())
            .ok_or_else(|| AppError::Invariant("refresh token is not registered".into()))
    }

    async fn delete_token(&self, token: &str) -> Result<()> {
        sqlx::query("DELETE FROM authentications WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::postgres::testing::store;
    use uuid::Uuid;

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn token_round_trip_through_table() {
        let store = store().await;
        let token = Uuid::new_v4().to_string();

        assert!(store.check_availability_token(&token).await.is_err());
        store.add_token(&token).await.unwrap();
        store.check_availability_token(&token).await.unwrap();
        store.delete_token(&token).await.unwrap();
        assert!(store.check_availability_token(&token).await.is_err());
    }
}
