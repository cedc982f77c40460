//! # PostgreSQL backend
//!
//! [`PgStore`] implements every repository port with plain `sqlx::query`
//! calls. Referential rules (parents exist, one like per user and comment,
//! unique usernames) are enforced by the schema in `migrations/`; this module
//! only translates the resulting database errors into [`AppError`]s.

mod authentications;
mod comments;
mod likes;
mod replies;
mod threads;
mod users;

use std::sync::Arc;

use domains::{AppError, DateProvider, IdGenerator, Resource, Result};
use sqlx::error::DatabaseError;
use sqlx::postgres::{PgPool, PgPoolOptions};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn DateProvider>,
}

impl PgStore {
    pub fn new(pool: PgPool, ids: Arc<dyn IdGenerator>, clock: Arc<dyn DateProvider>) -> Self {
        Self { pool, ids, clock }
    }
}

/// Opens a pool and brings the schema up to date.
pub async fn connect(url: &str, max_connections: u32) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
        .map_err(db_error)?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| AppError::Internal(format!("migration failed: {e}")))?;

    tracing::info!(max_connections, "postgres pool ready");
    Ok(pool)
}

/// Generic mapping for statements that cannot break a foreign key.
pub(crate) fn db_error(error: sqlx::Error) -> AppError {
    match &error {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            AppError::Conflict(db.message().to_owned())
        }
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
            tracing::error!(error = %error, "database pool unavailable");
            AppError::Internal("database unavailable".into())
        }
        _ => {
            tracing::error!(error = %error, "database operation failed");
            AppError::Internal("database error".into())
        }
    }
}

/// Mapping for inserts: a foreign-key violation means the referenced parent
/// (or owning user) does not exist.
pub(crate) fn insert_error(parent: Resource) -> impl FnOnce(sqlx::Error) -> AppError {
    move |error| match &error {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            AppError::NotFound(missing_reference(&**db, parent))
        }
        _ => db_error(error),
    }
}

fn missing_reference(db: &dyn DatabaseError, parent: Resource) -> Resource {
    match db.constraint() {
        Some(name) if name.contains("owner") || name.contains("user_id") => Resource::User,
        _ => parent,
    }
}
