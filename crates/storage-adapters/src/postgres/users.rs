use async_trait::async_trait;
use domains::{AppError, RegisterUser, RegisteredUser, Result, UserRepository};
use sqlx::Row;

use super::{db_error, PgStore};
use crate::support::prefixed_id;

fn unknown_username() -> AppError {
    AppError::Invariant("username not found".into())
}

#[async_trait]
impl UserRepository for PgStore {
    async fn verify_available_username(&self, username: &str) -> Result<()> {
        let taken = sqlx::query("SELECT 1 FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;

        if taken.is_some() {
            return Err(AppError::Invariant("username is already taken".into()));
        }
        Ok(())
    }

    async fn add_user(&self, user: RegisterUser) -> Result<RegisteredUser> {
        let id = prefixed_id("user", self.ids.as_ref());

        let row = sqlx::query(
            "INSERT INTO users (id, username, password, fullname) VALUES ($1, $2, $3, $4) \
             RETURNING id, username, fullname",
        )
        .bind(&id)
        .bind(user.username())
        .bind(user.password())
        .bind(user.fullname())
        .fetch_one(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(RegisteredUser::new(
            row.get::<String, _>("id"),
            row.get::<String, _>("username"),
            row.get::<String, _>("fullname"),
        )?)
    }

    async fn get_password_by_username(&self, username: &str) -> Result<String> {
        let row = sqlx::query("SELECT password FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?
            .ok_or_else(unknown_username)?;

        Ok(row.get("password"))
    }

    async fn get_id_by_username(&self, username: &str) -> Result<String> {
        let row = sqlx::query("SELECT id FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?
            .ok_or_else(unknown_username)?;

        Ok(row.get("id"))
    }
}
