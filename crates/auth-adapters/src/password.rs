use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{
    PasswordHash as ParsedHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::Argon2;
use async_trait::async_trait;
use domains::{AppError, PasswordHash, Result};

/// Argon2id with the crate defaults. Hashing is CPU-bound, so both operations
/// run on tokio's blocking pool.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2PasswordHash;

#[async_trait]
impl PasswordHash for Argon2PasswordHash {
    async fn hash(&self, password: &str) -> Result<String> {
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))
        })
        .await
        .map_err(|e| AppError::Internal(format!("hashing task failed: {e}")))?
    }

    async fn compare_password(&self, password: &str, hashed: &str) -> Result<()> {
        let (password, hashed) = (password.to_owned(), hashed.to_owned());

        tokio::task::spawn_blocking(move || {
            let parsed = ParsedHash::new(&hashed).map_err(|e| {
                tracing::error!(error = %e, "stored password hash is malformed");
                AppError::Internal("stored password hash is malformed".into())
            })?;

            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .map_err(|_| AppError::Unauthorized("wrong credentials".into()))
        })
        .await
        .map_err(|e| AppError::Internal(format!("hashing task failed: {e}")))?
    }
}
