//! Session use cases: login issues a token pair, refresh trades a stored
//! refresh token for a new access token, logout revokes the refresh token.

use std::sync::Arc;

use domains::{
    AuthCredentials, AuthenticationRepository, AuthenticationTokenManager, NewAuth, PasswordHash,
    RefreshToken, Result, UserLogin, UserRepository,
};

pub struct LoginUserUseCase {
    user_repository: Arc<dyn UserRepository>,
    authentication_repository: Arc<dyn AuthenticationRepository>,
    token_manager: Arc<dyn AuthenticationTokenManager>,
    password_hash: Arc<dyn PasswordHash>,
}

impl LoginUserUseCase {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        authentication_repository: Arc<dyn AuthenticationRepository>,
        token_manager: Arc<dyn AuthenticationTokenManager>,
        password_hash: Arc<dyn PasswordHash>,
    ) -> Self {
        Self {
            user_repository,
            authentication_repository,
            token_manager,
            password_hash,
        }
    }

    #[tracing::instrument(name = "login_user", skip_all, fields(username = %login.username()))]
    pub async fn execute(&self, login: UserLogin) -> Result<NewAuth> {
        let hashed = self
            .user_repository
            .get_password_by_username(login.username())
            .await?;
        self.password_hash
            .compare_password(login.password(), &hashed)
            .await?;

        let id = self
            .user_repository
            .get_id_by_username(login.username())
            .await?;
        let credentials = AuthCredentials::new(id, login.username())?;

        let access_token = self.token_manager.create_access_token(&credentials)?;
        let refresh_token = self.token_manager.create_refresh_token(&credentials)?;
        self.authentication_repository
            .add_token(&refresh_token)
            .await?;

        Ok(NewAuth::new(access_token, refresh_token)?)
    }
}

pub struct RefreshAuthenticationUseCase {
    authentication_repository: Arc<dyn AuthenticationRepository>,
    token_manager: Arc<dyn AuthenticationTokenManager>,
}

impl RefreshAuthenticationUseCase {
    pub fn new(
        authentication_repository: Arc<dyn AuthenticationRepository>,
        token_manager: Arc<dyn AuthenticationTokenManager>,
    ) -> Self {
        Self {
            authentication_repository,
            token_manager,
        }
    }

    /// Returns a fresh access token.
    #[tracing::instrument(name = "refresh_authentication", skip_all)]
    pub async fn execute(&self, token: RefreshToken) -> Result<String> {
        let credentials = self.token_manager.verify_refresh_token(token.as_str())?;
        self.authentication_repository
            .check_availability_token(token.as_str())
            .await?;

        self.token_manager.create_access_token(&credentials)
    }
}

pub struct LogoutUserUseCase {
    authentication_repository: Arc<dyn AuthenticationRepository>,
}

impl LogoutUserUseCase {
    pub fn new(authentication_repository: Arc<dyn AuthenticationRepository>) -> Self {
        Self {
            authentication_repository,
        }
    }

    #[tracing::instrument(name = "logout_user", skip_all)]
    pub async fn execute(&self, token: RefreshToken) -> Result<()> {
        self.authentication_repository
            .check_availability_token(token.as_str())
            .await?;
        self.authentication_repository
            .delete_token(token.as_str())
            .await
    }
}
