//! PostgreSQL storage backend using sqlx.
//!
//! `PostgresStore` implements every resource store on top of one shared
//! `sqlx::PgPool`.
//!
//! # Feature flag
//!
//! This module is gated behind the `postgres` feature flag:
//! ```toml
//! [dependencies]
//! shop-backend = { version = "0.1", features = ["postgres"] }
//! ```
//!
//! # Schema
//!
//! One table per resource. Order lines live in `order_products` and are
//! removed with their order. Basket, favorites and marks are keyed by
//! `(user_id, product_id)`; averages by `product_id`.

mod basket;
mod categories;
mod comments;
mod favorites;
mod firms;
mod marks;
mod orders;
mod prices;
mod products;
mod users;

use crate::config::DatabaseConfig;
use crate::core::{StoreError, StoreResult};
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};

/// Every table created by [`PostgresStore::ensure_schema`], children first.
pub const TABLES: &[&str] = &[
    "order_products",
    "orders",
    "basket",
    "favorites",
    "marks",
    "avg_marks",
    "comments",
    "prices",
    "products",
    "categories",
    "firms",
    "users",
];

const SCHEMA: &[(&str, &str)] = &[
    (
        "users",
        "CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            telegram_id BIGINT NOT NULL UNIQUE,
            username TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )",
    ),
    (
        "firms",
        "CREATE TABLE IF NOT EXISTS firms (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL
        )",
    ),
    (
        "categories",
        "CREATE TABLE IF NOT EXISTS categories (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            image TEXT NULL
        )",
    ),
    (
        "products",
        "CREATE TABLE IF NOT EXISTS products (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            firm_id BIGINT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            category_id BIGINT NOT NULL,
            attributes JSONB NOT NULL DEFAULT '{}'::jsonb,
            sell_count INTEGER NOT NULL DEFAULT 0,
            stock INTEGER NOT NULL DEFAULT 0,
            image TEXT[] NOT NULL DEFAULT '{}'
        )",
    ),
    (
        "prices",
        "CREATE TABLE IF NOT EXISTS prices (
            id BIGSERIAL PRIMARY KEY,
            product_id BIGINT NOT NULL,
            count INTEGER NOT NULL,
            price DOUBLE PRECISION NOT NULL
        )",
    ),
    (
        "prices_product_idx",
        "CREATE INDEX IF NOT EXISTS idx_prices_product_id ON prices (product_id, id)",
    ),
    (
        "basket",
        "CREATE TABLE IF NOT EXISTS basket (
            user_id BIGINT NOT NULL,
            product_id BIGINT NOT NULL,
            quantity INTEGER NOT NULL,
            added_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            PRIMARY KEY (user_id, product_id)
        )",
    ),
    (
        "favorites",
        "CREATE TABLE IF NOT EXISTS favorites (
            user_id BIGINT NOT NULL,
            product_id BIGINT NOT NULL,
            added_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            PRIMARY KEY (user_id, product_id)
        )",
    ),
    (
        "orders",
        "CREATE TABLE IF NOT EXISTS orders (
            id BIGSERIAL PRIMARY KEY,
            user_id BIGINT NOT NULL,
            status TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )",
    ),
    (
        "order_products",
        "CREATE TABLE IF NOT EXISTS order_products (
            id BIGSERIAL PRIMARY KEY,
            order_id BIGINT NOT NULL REFERENCES orders (id) ON DELETE CASCADE,
            product_id BIGINT NOT NULL,
            quantity INTEGER NOT NULL,
            price DOUBLE PRECISION NOT NULL
        )",
    ),
    (
        "order_products_order_idx",
        "CREATE INDEX IF NOT EXISTS idx_order_products_order_id ON order_products (order_id)",
    ),
    (
        "marks",
        "CREATE TABLE IF NOT EXISTS marks (
            user_id BIGINT NOT NULL,
            product_id BIGINT NOT NULL,
            mark DOUBLE PRECISION NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            PRIMARY KEY (user_id, product_id)
        )",
    ),
    (
        "avg_marks",
        "CREATE TABLE IF NOT EXISTS avg_marks (
            product_id BIGINT PRIMARY KEY,
            sum DOUBLE PRECISION NOT NULL,
            count BIGINT NOT NULL,
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )",
    ),
    (
        "comments",
        "CREATE TABLE IF NOT EXISTS comments (
            id BIGSERIAL PRIMARY KEY,
            user_id BIGINT NOT NULL,
            product_id BIGINT NOT NULL,
            comment TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )",
    ),
];

/// Backend for all resources, backed by a PostgreSQL pool
#[derive(Clone, Debug)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new `PostgresStore` with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool sized and timed from `config`.
    pub async fn connect(config: &DatabaseConfig) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .max_lifetime(config.max_lifetime())
            .acquire_timeout(config.acquire_timeout())
            .connect_with(connect_options(config)?)
            .await?;

        tracing::info!(
            host = %config.host,
            port = config.port,
            database = %config.name,
            max_connections = config.max_connections,
            "connected to PostgreSQL"
        );
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Apply the required tables and indexes (idempotent).
    ///
    /// Safe to call on every startup.
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        for &(name, ddl) in SCHEMA {
            sqlx::query(ddl).execute(&self.pool).await.map_err(|e| {
                tracing::error!(object = name, error = %e, "schema statement failed");
                StoreError::from(e)
            })?;
        }
        tracing::debug!(statements = SCHEMA.len(), "schema ensured");
        Ok(())
    }
}

/// Connection options built field by field, so credentials are never
/// parsed out of a URL.
pub fn connect_options(config: &DatabaseConfig) -> StoreResult<PgConnectOptions> {
    let ssl_mode: PgSslMode = config.sslmode.trim().parse().map_err(|_| {
        StoreError::Invalid(format!("unsupported sslmode '{}'", config.sslmode))
    })?;

    Ok(PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name)
        .ssl_mode(ssl_mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_characters_in_credentials() {
        let config = DatabaseConfig {
            user: "shop@admin".to_string(),
            password: "pa/ss@w:rd#1".to_string(),
            name: "shop/main".to_string(),
            ..Default::default()
        };

        let options = connect_options(&config).unwrap();
        assert_eq!(options.get_host(), "localhost");
        assert_eq!(options.get_port(), 5432);
        assert_eq!(options.get_username(), "shop@admin");
        assert_eq!(options.get_database(), Some("shop/main"));
    }

    #[test]
    fn test_unknown_sslmode_is_rejected() {
        let config = DatabaseConfig {
            sslmode: "sometimes".to_string(),
            ..Default::default()
        };

        let err = connect_options(&config).unwrap_err();
        assert!(matches!(err, StoreError::Invalid(_)));
    }

    #[tokio::test]
    async fn test_password_with_reserved_characters_builds_lazy_pool() {
        let config = DatabaseConfig {
            password: "pa/ss@w:rd#1".to_string(),
            ..Default::default()
        };

        // lazy pools never dial, so only option handling is exercised
        let pool = PgPoolOptions::new().connect_lazy_with(connect_options(&config).unwrap());
        assert_eq!(pool.size(), 0);
    }
}
