//! # seed
//!
//! Registers one account in the Postgres database named by the settings:
//!
//! ```text
//! seed <username> <password> <fullname>
//! ```
//!
//! Goes through `AddUserUseCase`, so the username rules and password hashing
//! are the same as `POST /users`.

use std::sync::Arc;

use anyhow::{bail, Context};
use auth_adapters::Argon2PasswordHash;
use configs::{Settings, StorageBackend};
use domains::RegisterUser;
use secrecy::ExposeSecret;
use services::AddUserUseCase;
use storage_adapters::postgres::{connect, PgStore};
use storage_adapters::{SystemDateProvider, UuidIdGenerator};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("loading settings")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log.level)),
        )
        .compact()
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(username), Some(password), Some(fullname)) = (args.next(), args.next(), args.next())
    else {
        bail!("usage: seed <username> <password> <fullname>");
    };

    if settings.storage.backend != StorageBackend::Postgres {
        bail!("seeding needs storage.backend = \"postgres\"; the memory backend does not outlive the process");
    }
    let url = settings
        .database
        .url
        .as_ref()
        .context("database.url is required for the postgres backend")?;
    let pool = connect(url.expose_secret(), settings.database.max_connections)
        .await
        .context("connecting to postgres")?;

    let store = Arc::new(PgStore::new(
        pool,
        Arc::new(UuidIdGenerator),
        Arc::new(SystemDateProvider),
    ));
    let add_user = AddUserUseCase::new(store, Arc::new(Argon2PasswordHash));

    let user = RegisterUser::new(username, password, fullname).context("invalid account")?;
    let registered = add_user.execute(user).await.context("registering account")?;

    tracing::info!(id = registered.id(), username = registered.username(), "account seeded");
    Ok(())
}
