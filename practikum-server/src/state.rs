//! Application state and configuration

use anyhow::{Context, Result};
use practikum_core::Database;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Settings read from the environment at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// SQLite database file (`PRACTIKUM_DATABASE_PATH`)
    pub database_path: PathBuf,

    /// Listen address (`PRACTIKUM_ADDR`)
    pub addr: SocketAddr,

    /// Allowed CORS origins (`PRACTIKUM_CORS_ORIGINS`), `*` for any
    pub cors_origins: Option<String>,
}

impl ServerConfig {
    pub const DEFAULT_DATABASE_PATH: &'static str = "./app.db";
    pub const DEFAULT_ADDR: &'static str = "127.0.0.1:3000";

    /// Read configuration from `PRACTIKUM_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_path = lookup("PRACTIKUM_DATABASE_PATH")
            .unwrap_or_else(|| Self::DEFAULT_DATABASE_PATH.to_string());
        let addr = lookup("PRACTIKUM_ADDR").unwrap_or_else(|| Self::DEFAULT_ADDR.to_string());
        let addr = addr
            .parse()
            .with_context(|| format!("Invalid PRACTIKUM_ADDR: {}", addr))?;

        Ok(Self {
            database_path: PathBuf::from(database_path),
            addr,
            cors_origins: lookup("PRACTIKUM_CORS_ORIGINS"),
        })
    }
}

/// Shared application state
///
/// Holds no mutable data; each request opens its own connection.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    /// Wrap an already initialized database
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Create state from configuration, creating missing tables
    pub async fn from_config(config: &ServerConfig) -> Result<Self> {
        let db = Database::init(config.database_path.clone())
            .await
            .with_context(|| {
                format!(
                    "Failed to open database {}",
                    config.database_path.display()
                )
            })?;
        Ok(Self::new(db))
    }
}
