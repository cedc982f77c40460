use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use domains::{AppError, RegisterUser, RegisteredUser, Result, UserRepository};

use super::{MemoryStore, UserRow};
use crate::support::prefixed_id;

#[async_trait]
impl UserRepository for MemoryStore {
    async fn verify_available_username(&self, username: &str) -> Result<()> {
        if self.usernames.contains_key(username) {
            return Err(AppError::Invariant("username is already taken".into()));
        }
        Ok(())
    }

    async fn add_user(&self, user: RegisterUser) -> Result<RegisteredUser> {
        let id = prefixed_id("user", self.ids.as_ref());

        match self.usernames.entry(user.username().to_owned()) {
            Entry::Occupied(_) => {
                return Err(AppError::Conflict("username is already taken".into()))
            }
            Entry::Vacant(slot) => {
                slot.insert(id.clone());
            }
        }

        let registered = RegisteredUser::new(id.as_str(), user.username(), user.fullname())?;
        self.users.insert(
            id,
            UserRow {
                username: user.username().to_owned(),
                password: user.password().to_owned(),
            },
        );
        tracing::debug!(user_id = %registered.id(), "user stored");

        Ok(registered)
    }

    async fn get_password_by_username(&self, username: &str) -> Result<String> {
        let id = self.get_id_by_username(username).await?;
        self.users
            .get(&id)
            .map(|user| user.password.clone())
            .ok_or_else(|| AppError::Invariant("username not found".into()))
    }

    async fn get_id_by_username(&self, username: &str) -> Result<String> {
        self.usernames
            .get(username)
            .map(|id| id.value().clone())
            .ok_or_else(|| AppError::Invariant("username not found".into()))
    }
}
