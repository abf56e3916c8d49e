//! Shop backend server
//!
//! Reads configuration from `.env`, an optional YAML file (`SHOP_CONFIG`)
//! and the environment, then serves the REST API until Ctrl+C or SIGTERM.

use anyhow::{Context, Result};
use shop::config::{AppConfig, StorageBackend};
use shop::server::ServerBuilder;
use shop::storage::Stores;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        storage = ?config.storage,
        "starting shop backend"
    );

    let stores = open_stores(&config).await?;

    ServerBuilder::new()
        .with_stores(stores)
        .serve(&config.server.addr())
        .await
}

async fn open_stores(config: &AppConfig) -> Result<Stores> {
    match config.storage {
        StorageBackend::Memory => {
            tracing::warn!("using in-memory storage; data is lost on shutdown");
            Ok(Stores::in_memory())
        }
        StorageBackend::Postgres => postgres_stores(config).await,
    }
}

#[cfg(feature = "postgres")]
async fn postgres_stores(config: &AppConfig) -> Result<Stores> {
    use shop::storage::PostgresStore;

    let store = PostgresStore::connect(&config.database)
        .await
        .context("failed to connect to PostgreSQL")?;
    store
        .ensure_schema()
        .await
        .context("failed to apply database schema")?;
    Ok(Stores::from_backend(store))
}

#[cfg(not(feature = "postgres"))]
async fn postgres_stores(_config: &AppConfig) -> Result<Stores> {
    anyhow::bail!("STORAGE_BACKEND=postgres requires building with the `postgres` feature")
}
