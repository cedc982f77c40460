//! # auth-adapters
//!
//! Security backends for the `PasswordHash` and `AuthenticationTokenManager`
//! ports: Argon2 password hashing (always compiled) and HS256 JSON Web Tokens
//! (feature `auth-jwt`).

pub mod password;

#[cfg(feature = "auth-jwt")]
pub mod jwt;

pub use password::Argon2PasswordHash;

#[cfg(feature = "auth-jwt")]
pub use jwt::JwtTokenManager;
