//! # Authentication entities
//!
//! Bearer tokens carry [`AuthCredentials`]; refresh tokens are additionally
//! persisted so a logout can revoke them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Entity, ValidationError};
use crate::payload::{ensure_present, Payload};

/// Identity embedded in access and refresh tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthCredentials {
    pub id: String,
    pub username: String,
}

impl AuthCredentials {
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Result<Self, ValidationError> {
        let credentials = Self {
            id: id.into(),
            username: username.into(),
        };
        ensure_present(
            Entity::AuthCredentials,
            &[&credentials.id, &credentials.username],
        )?;
        Ok(credentials)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAuth {
    access_token: String,
    refresh_token: String,
}

impl NewAuth {
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let auth = Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        };
        ensure_present(Entity::NewAuth, &[&auth.access_token, &auth.refresh_token])?;
        Ok(auth)
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }
}

/// The `{ refreshToken }` body of `PUT` and `DELETE /authentications`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshToken(String);

impl RefreshToken {
    pub fn new(token: impl Into<String>) -> Result<Self, ValidationError> {
        let token = token.into();
        ensure_present(Entity::RefreshToken, &[&token])?;
        Ok(Self(token))
    }

    pub fn from_payload(value: &Value) -> Result<Self, ValidationError> {
        let payload = Payload::new(Entity::RefreshToken, value);
        payload.require(&["refreshToken"])?;
        Self::new(payload.string("refreshToken")?)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn refresh_token_payload() {
        let err = RefreshToken::from_payload(&json!({})).unwrap_err();
        assert_eq!(err.to_string(), "REFRESH_TOKEN.NOT_CONTAIN_NEEDED_PROPERTY");

        let err = RefreshToken::from_payload(&json!({ "refreshToken": 1 })).unwrap_err();
        assert_eq!(err.to_string(), "REFRESH_TOKEN.NOT_MEET_DATA_TYPE_SPECIFICATION");

        let token = RefreshToken::from_payload(&json!({ "refreshToken": "abc.def.ghi" })).unwrap();
        assert_eq!(token.as_str(), "abc.def.ghi");
    }

    #[test]
    fn new_auth_serializes_camel_case() {
        let auth = NewAuth::new("access", "refresh").unwrap();
        let json = serde_json::to_value(&auth).unwrap();
        assert_eq!(json, json!({ "accessToken": "access", "refreshToken": "refresh" }));
    }
}
