//! # forum-api
//!
//! Loads settings, picks the storage backend, wires the ports into the
//! use cases and serves the HTTP API until Ctrl-C.

use std::sync::Arc;

use anyhow::Context;
use api_adapters::{router, AppState};
use auth_adapters::{Argon2PasswordHash, JwtTokenManager};
use chrono::TimeDelta;
use configs::{LogFormat, Settings, StorageBackend};
use secrecy::ExposeSecret;
use services::Ports;
use storage_adapters::MemoryStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("loading settings")?;
    init_tracing(&settings);

    let token_manager = Arc::new(JwtTokenManager::new(
        settings.auth.access_token_key.expose_secret(),
        settings.auth.refresh_token_key.expose_secret(),
        TimeDelta::seconds(settings.auth.access_token_age_secs),
    ));
    let password_hash = Arc::new(Argon2PasswordHash);

    let ports = match settings.storage.backend {
        StorageBackend::Memory => {
            tracing::warn!("using in-memory storage; data is lost on shutdown");
            let store = Arc::new(MemoryStore::default());
            Ports {
                threads: store.clone(),
                comments: store.clone(),
                replies: store.clone(),
                likes: store.clone(),
                users: store.clone(),
                authentications: store,
                password_hash,
                token_manager,
            }
        }
        StorageBackend::Postgres => postgres_ports(&settings, password_hash, token_manager).await?,
    };

    let app = router(AppState::new(ports));
    let address = settings.server.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("binding {address}"))?;

    tracing::info!(%address, backend = ?settings.storage.backend, "forum api listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving http")?;

    tracing::info!("shut down");
    Ok(())
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match settings.log.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Compact => builder.compact().init(),
    }
}

#[cfg(feature = "db-postgres")]
async fn postgres_ports(
    settings: &Settings,
    password_hash: Arc<Argon2PasswordHash>,
    token_manager: Arc<JwtTokenManager>,
) -> anyhow::Result<Ports> {
    use storage_adapters::postgres::{connect, PgStore};
    use storage_adapters::{SystemDateProvider, UuidIdGenerator};

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
    Ok(Ports {
        threads: store.clone(),
        comments: store.clone(),
        replies: store.clone(),
        likes: store.clone(),
        users: store.clone(),
        authentications: store,
        password_hash,
        token_manager,
    })
}

#[cfg(not(feature = "db-postgres"))]
async fn postgres_ports(
    _settings: &Settings,
    _password_hash: Arc<Argon2PasswordHash>,
    _token_manager: Arc<JwtTokenManager>,
) -> anyhow::Result<Ports> {
    anyhow::bail!("storage.backend is postgres but this build has no db-postgres feature")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
