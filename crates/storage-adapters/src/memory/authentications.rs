use async_trait::async_trait;
use domains::{AppError, AuthenticationRepository, Result};

use super::MemoryStore;

#[async_trait]
impl AuthenticationRepository for MemoryStore {
    async fn add_token(&self, token: &str) -> Result<()> {
        self.tokens.insert(token.to_owned());
        Ok(())
    }

    async fn check_availability_token(&self, token: &str) -> Result<()> {
        if self.tokens.contains(token) {
            Ok(())
        } else {
            Err(AppError::Invariant("refresh token is not registered".into()))
        }
    }

    async fn delete_token(&self, token: &str) -> Result<()> {
        self.tokens.remove(token);
        Ok(())
    }
}
