//! Configuration loading and management
//!
//! Configuration is layered:
//!
//! 1. built-in defaults
//! 2. an optional YAML file (path taken from `SHOP_CONFIG`)
//! 3. environment variables (a `.env` file is read first, if present)
//!
//! Environment variable names follow the deployment conventions of the shop:
//! `POSTGRES_HOST`, `POSTGRES_PORT`, `POSTGRES_USER`, `POSTGRES_PASSWORD`,
//! `POSTGRES_DB`, `POSTGRES_SSLMODE`, `POSTGRES_MAX_CONNECTIONS`,
//! `SERVER_HOST`, `SERVER_PORT`, `STORAGE_BACKEND` and `LOG_FILTER`.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the optional YAML config path.
pub const CONFIG_PATH_VAR: &str = "SHOP_CONFIG";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Which storage backend the server runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    Postgres,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "in-memory" | "in_memory" => Ok(StorageBackend::Memory),
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            other => Err(other.to_string()),
        }
    }
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// `host:port`, ready for `TcpListener::bind`
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// PostgreSQL connection and pool settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    /// libpq `sslmode` value (`disable`, `prefer`, `require`, ...)
    pub sslmode: String,
    pub max_connections: u32,
    pub max_lifetime_secs: u64,
    pub acquire_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            name: "telegramshop".to_string(),
            sslmode: "disable".to_string(),
            max_connections: 25,
            max_lifetime_secs: 300,
            acquire_timeout_secs: 5,
        }
    }
}

impl DatabaseConfig {
    pub fn max_lifetime(&self) -> Duration {
        Duration::from_secs(self.max_lifetime_secs)
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub storage: StorageBackend,
    /// Fallback `tracing` filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            storage: StorageBackend::default(),
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `.env`, the optional YAML file and the
    /// process environment.
    pub fn load() -> Result<Self, ConfigError> {
        // a missing .env is not an error
        let _ = dotenvy::dotenv();

        let base = match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) if !path.trim().is_empty() => Self::from_yaml_file(path.trim())?,
            _ => Self::default(),
        };

        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string; missing fields take defaults
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Build from defaults plus a variable lookup (the environment in
    /// production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::default().with_overrides(lookup)
    }

    /// Apply variable overrides on top of `self`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = var("SERVER_HOST") {
            self.server.host = v;
        }
        if let Some(v) = var("SERVER_PORT") {
            self.server.port = parse_var("SERVER_PORT", &v)?;
        }
        if let Some(v) = var("POSTGRES_HOST") {
            self.database.host = v;
        }
        if let Some(v) = var("POSTGRES_PORT") {
            self.database.port = parse_var("POSTGRES_PORT", &v)?;
        }
        if let Some(v) = var("POSTGRES_USER") {
            self.database.user = v;
        }
        if let Some(v) = var("POSTGRES_PASSWORD") {
            self.database.password = v;
        }
        if let Some(v) = var("POSTGRES_DB") {
            self.database.name = v;
        }
        if let Some(v) = var("POSTGRES_SSLMODE") {
            self.database.sslmode = v;
        }
        if let Some(v) = var("POSTGRES_MAX_CONNECTIONS") {
            self.database.max_connections = parse_var("POSTGRES_MAX_CONNECTIONS", &v)?;
        }
        if let Some(v) = var("STORAGE_BACKEND") {
            self.storage = parse_var("STORAGE_BACKEND", &v)?;
        }
        if let Some(v) = var("LOG_FILTER") {
            self.log_filter = v;
        }

        Ok(self)
    }
}

fn parse_var<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.max_connections, 25);
        assert_eq!(config.database.max_lifetime(), Duration::from_secs(300));
        assert_eq!(config.storage, StorageBackend::Memory);
    }

    #[test]
    fn test_env_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("SERVER_PORT", "9000"),
            ("POSTGRES_HOST", "db"),
            ("POSTGRES_DB", "shop"),
            ("STORAGE_BACKEND", "postgres"),
        ]))
        .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.database.host, "db");
        assert_eq!(config.database.name, "shop");
        assert_eq!(config.storage, StorageBackend::Postgres);
        // untouched
        assert_eq!(config.database.user, "postgres");
    }

    #[test]
    fn test_blank_env_value_is_ignored() {
        let config = AppConfig::from_lookup(lookup(&[("SERVER_PORT", "  ")])).unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[("SERVER_PORT", "eighty")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: "SERVER_PORT",
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_backend_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[("STORAGE_BACKEND", "redis")])).unwrap_err();
        assert!(err.to_string().contains("STORAGE_BACKEND"));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = AppConfig::from_yaml_str(
            r#"
server:
  port: 3000
storage: postgres
"#,
        )
        .unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.storage, StorageBackend::Postgres);
        assert_eq!(config.database.port, 5432);
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = AppConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = AppConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(AppConfig::from_yaml_str("").unwrap(), AppConfig::default());
    }
}
