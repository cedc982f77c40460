use std::sync::Arc;

use domains::{PasswordHash, RegisterUser, RegisteredUser, Result, UserRepository};

/// Registers an account, storing only the password hash.
pub struct AddUserUseCase {
    user_repository: Arc<dyn UserRepository>,
    password_hash: Arc<dyn PasswordHash>,
}

impl AddUserUseCase {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        password_hash: Arc<dyn PasswordHash>,
    ) -> Self {
        Self {
            user_repository,
            password_hash,
        }
    }

    #[tracing::instrument(name = "add_user", skip_all, fields(username = %user.username()))]
    pub async fn execute(&self, user: RegisterUser) -> Result<RegisteredUser> {
        self.user_repository
            .verify_available_username(user.username())
            .await?;
        let hashed = self.password_hash.hash(user.password()).await?;

        self.user_repository
            .add_user(user.with_password_hash(hashed))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domains::{AppError, MockPasswordHash, MockUserRepository};

    #[tokio::test]
    async fn stores_user_with_hashed_password() {
        let mut users = MockUserRepository::new();
        users
            .expect_verify_available_username()
            .withf(|username| username == "dicoding")
            .times(1)
            .returning(|_| Ok(()));
        users
            .expect_add_user()
            .withf(|u| u.username() == "dicoding" && u.password() == "encrypted_password")
            .times(1)
            .returning(|u| RegisteredUser::new("user-123", u.username(), u.fullname()).map_err(Into::into));

        let mut hasher = MockPasswordHash::new();
        hasher
            .expect_hash()
            .withf(|password| password == "secret")
            .times(1)
            .returning(|_| Ok("encrypted_password".to_owned()));

        let use_case = AddUserUseCase::new(Arc::new(users), Arc::new(hasher));
        let registered = use_case
            .execute(RegisterUser::new("dicoding", "secret", "Dicoding Indonesia").unwrap())
            .await
            .unwrap();

        assert_eq!(
            registered,
            RegisteredUser::new("user-123", "dicoding", "Dicoding Indonesia").unwrap()
        );
    }

    #[tokio::test]
    async fn taken_username_is_rejected_before_hashing() {
        let mut users = MockUserRepository::new();
        users
            .expect_verify_available_username()
            .returning(|_| Err(AppError::Invariant("username is already taken".into())));
        users.expect_add_user().never();

        let mut hasher = MockPasswordHash::new();
        hasher.expect_hash().never();

        let use_case = AddUserUseCase::new(Arc::new(users), Arc::new(hasher));
        let err = use_case
            .execute(RegisterUser::new("dicoding", "secret", "Dicoding Indonesia").unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Invariant(_)));
    }
}
