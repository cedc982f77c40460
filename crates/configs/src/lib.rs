//! # configs
//!
//! Layered settings for the forum server, lowest precedence first:
//!
//! 1. built-in defaults,
//! 2. `config/default.toml` and `config/local.toml` (both optional),
//! 3. environment variables prefixed `FORUM__`, nested with `__`
//!    (`FORUM__AUTH__ACCESS_TOKEN_KEY`, `FORUM__STORAGE__BACKEND`, ...).
//!
//! A `.env` file is read into the environment first when present.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use secrecy::SecretString;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    /// `storage.backend = "postgres"` without `database.url`
    #[error("storage backend is postgres but database.url is not set")]
    MissingDatabaseUrl,

    #[error("invalid setting {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    Postgres,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize)]
pub struct StorageSettings {
    pub backend: StorageBackend,
}

#[derive(Debug, Deserialize)]
pub struct DatabaseSettings {
    pub url: Option<SecretString>,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize)]
pub struct AuthSettings {
    pub access_token_key: SecretString,
    pub refresh_token_key: SecretString,
    pub access_token_age_secs: i64,
}

#[derive(Debug, Deserialize)]
pub struct LogSettings {
    /// `EnvFilter` directive; `RUST_LOG` wins when set.
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub database: DatabaseSettings,
    pub auth: AuthSettings,
    pub log: LogSettings,
}

impl Settings {
    /// Reads `.env`, the optional TOML files and the `FORUM__*` environment.
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!(error = %e, "ignoring unreadable .env file");
            }
        }

        Self::from_builder(
            Config::builder()
                .add_source(File::with_name("config/default").required(false))
                .add_source(File::with_name("config/local").required(false))
                .add_source(
                    Environment::with_prefix("FORUM")
                        .prefix_separator("__")
                        .separator("__")
                        .try_parsing(true),
                ),
        )
    }

    /// Applies defaults under `builder`'s sources, then validates.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let settings: Self = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("storage.backend", "memory")?
            .set_default("database.max_connections", 5)?
            .set_default("auth.access_token_age_secs", 3600)?
            .set_default("log.level", "info")?
            .set_default("log.format", "compact")?
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.backend == StorageBackend::Postgres && self.database.url.is_none() {
            return Err(ConfigError::MissingDatabaseUrl);
        }
        if self.auth.access_token_age_secs <= 0 {
            return Err(ConfigError::Invalid {
                key: "auth.access_token_age_secs",
                reason: "must be positive".into(),
            });
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "database.max_connections",
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;
    use secrecy::ExposeSecret;

    fn from_toml(toml: &str) -> Result<Settings, ConfigError> {
        Settings::from_builder(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    const KEYS: &str = r#"
        [auth]
        access_token_key = "access"
        refresh_token_key = "refresh"
    "#;

    #[test]
    fn defaults_fill_everything_but_the_keys() {
        let settings = from_toml(KEYS).unwrap();

        assert_eq!(settings.server.address(), "127.0.0.1:5000");
        assert_eq!(settings.storage.backend, StorageBackend::Memory);
        assert_eq!(settings.database.max_connections, 5);
        assert!(settings.database.url.is_none());
        assert_eq!(settings.auth.access_token_age_secs, 3600);
        assert_eq!(settings.auth.access_token_key.expose_secret(), "access");
        assert_eq!(settings.log.level, "info");
        assert_eq!(settings.log.format, LogFormat::Compact);
    }

    #[test]
    fn token_keys_are_required() {
        assert!(matches!(from_toml(""), Err(ConfigError::Load(_))));
    }

    #[test]
    fn postgres_backend_needs_a_url() {
        let toml = format!("{KEYS}\n[storage]\nbackend = \"postgres\"\n");
        assert!(matches!(from_toml(&toml), Err(ConfigError::MissingDatabaseUrl)));

        let toml = format!(
            "{KEYS}\n[storage]\nbackend = \"postgres\"\n[database]\nurl = \"postgres://localhost/forum\"\n"
        );
        let settings = from_toml(&toml).unwrap();
        assert_eq!(settings.storage.backend, StorageBackend::Postgres);
        assert_eq!(
            settings.database.url.as_ref().map(|url| url.expose_secret().to_owned()),
            Some("postgres://localhost/forum".to_owned())
        );
    }

    #[test]
    fn non_positive_token_age_is_rejected() {
        let toml = r#"
            [auth]
            access_token_key = "access"
            refresh_token_key = "refresh"
            access_token_age_secs = 0
        "#;
        assert!(matches!(
            from_toml(toml),
            Err(ConfigError::Invalid { key: "auth.access_token_age_secs", .. })
        ));
    }

    #[test]
    fn secrets_stay_out_of_debug_output() {
        let settings = from_toml(KEYS).unwrap();
        let debug = format!("{:?}", settings.auth);
        assert!(debug.contains("REDACTED"), "{debug}");
        assert!(!debug.contains("\"access\""), "{debug}");
    }
}
