//! HS256 tokens carrying `{ id, username }`.
//!
//! Access tokens expire after a configured age. Refresh tokens carry no `exp`;
//! they stay usable until their row is removed from the authentications table.

use chrono::{TimeDelta, Utc};
use domains::{AppError, AuthCredentials, AuthenticationTokenManager, Result};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    #[serde(flatten)]
    credentials: AuthCredentials,
    iat: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    exp: Option<i64>,
}

struct KeyPair {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl KeyPair {
    fn from_secret(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

pub struct JwtTokenManager {
    access: KeyPair,
    refresh: KeyPair,
    access_token_age: TimeDelta,
}

impl JwtTokenManager {
    pub fn new(access_key: &str, refresh_key: &str, access_token_age: TimeDelta) -> Self {
        Self {
            access: KeyPair::from_secret(access_key.as_bytes()),
            refresh: KeyPair::from_secret(refresh_key.as_bytes()),
            access_token_age,
        }
    }

    fn sign(&self, keys: &KeyPair, credentials: &AuthCredentials, exp: Option<i64>) -> Result<String> {
        let claims = Claims {
            credentials: credentials.clone(),
            iat: Utc::now().timestamp(),
            exp,
        };
        encode(&Header::new(Algorithm::HS256), &claims, &keys.encoding)
            .map_err(|e| AppError::Internal(format!("token signing failed: {e}")))
    }
}

impl AuthenticationTokenManager for JwtTokenManager {
    fn create_access_token(&self, credentials: &AuthCredentials) -> Result<String> {
        let exp = (Utc::now() + self.access_token_age).timestamp();
        self.sign(&self.access, credentials, Some(exp))
    }

    fn create_refresh_token(&self, credentials: &AuthCredentials) -> Result<String> {
        self.sign(&self.refresh, credentials, None)
    }

    fn verify_refresh_token(&self, token: &str) -> Result<AuthCredentials> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        decode::<Claims>(token, &self.refresh.decoding, &validation)
            .map(|data| data.claims.credentials)
            .map_err(|_| AppError::Invariant("refresh token is invalid".into()))
    }

    fn verify_access_token(&self, token: &str) -> Result<AuthCredentials> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(token, &self.access.decoding, &validation)
            .map(|data| data.claims.credentials)
            .map_err(|e| {
                tracing::debug!(error = %e, "access token rejected");
                AppError::Unauthorized("missing or invalid access token".into())
            })
    }
}
