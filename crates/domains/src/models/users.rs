//! # User entities

use serde::Serialize;
use serde_json::Value;

use crate::error::{Entity, ValidationError, ValidationKind};
use crate::payload::{ensure_present, Payload};

const USERNAME_MAX_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUser {
    username: String,
    password: String,
    fullname: String,
}

impl RegisterUser {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        fullname: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let user = Self {
            username: username.into(),
            password: password.into(),
            fullname: fullname.into(),
        };
        ensure_present(
            Entity::RegisterUser,
            &[&user.username, &user.password, &user.fullname],
        )?;

        if user.username.chars().count() > USERNAME_MAX_CHARS {
            return Err(ValidationError::new(
                Entity::RegisterUser,
                ValidationKind::UsernameLimitChar,
            ));
        }
        if !user
            .username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(ValidationError::new(
                Entity::RegisterUser,
                ValidationKind::UsernameRestrictedCharacter,
            ));
        }
        Ok(user)
    }

    pub fn from_payload(value: &Value) -> Result<Self, ValidationError> {
        let payload = Payload::new(Entity::RegisterUser, value);
        payload.require(&["username", "password", "fullname"])?;
        Self::new(
            payload.string("username")?,
            payload.string("password")?,
            payload.string("fullname")?,
        )
    }

    /// Same registration, with the plain password swapped for its hash.
    pub fn with_password_hash(self, hash: String) -> Self {
        Self {
            password: hash,
            ..self
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn fullname(&self) -> &str {
        &self.fullname
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredUser {
    id: String,
    username: String,
    fullname: String,
}

impl RegisteredUser {
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        fullname: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let user = Self {
            id: id.into(),
            username: username.into(),
            fullname: fullname.into(),
        };
        ensure_present(
            Entity::RegisteredUser,
            &[&user.id, &user.username, &user.fullname],
        )?;
        Ok(user)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn fullname(&self) -> &str {
        &self.fullname
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserLogin {
    username: String,
    password: String,
}

impl UserLogin {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let login = Self {
            username: username.into(),
            password: password.into(),
        };
        ensure_present(Entity::UserLogin, &[&login.username, &login.password])?;
        Ok(login)
    }

    pub fn from_payload(value: &Value) -> Result<Self, ValidationError> {
        let payload = Payload::new(Entity::UserLogin, value);
        payload.require(&["username", "password"])?;
        Self::new(payload.string("username")?, payload.string("password")?)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}
