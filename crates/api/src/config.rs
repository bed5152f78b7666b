use anyhow::{bail, Context, Result};
use std::env;

/// Which [`infra::Store`] implementation the server runs on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl std::str::FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            "memory" => Ok(StorageBackend::Memory),
            other => bail!("unknown STORAGE_BACKEND: {other}"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub storage: StorageBackend,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub skip_migrations: bool,
    pub introspection_enabled: bool,
    pub playground_enabled: bool,
    pub allowed_origins: Vec<String>,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            storage: StorageBackend::Postgres,
            database_url: None,
            database_max_connections: 30,
            skip_migrations: false,
            introspection_enabled: false,
            playground_enabled: false,
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:3001".to_string(),
            ],
            request_timeout_secs: 30,
        }
    }
}

fn flag(name: &str) -> bool {
    env::var(name)
        .map(|v| v.to_lowercase() == "true")
        .unwrap_or(false)
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let storage = match env::var("STORAGE_BACKEND") {
            Ok(v) => v.parse()?,
            Err(_) => defaults.storage,
        };

        let database_url = env::var("DATABASE_URL").ok();
        if storage == StorageBackend::Postgres && database_url.is_none() {
            bail!("DATABASE_URL must be set when STORAGE_BACKEND is postgres");
        }

        let port = match env::var("PORT") {
            Ok(v) => v.parse().with_context(|| format!("invalid PORT: {v}"))?,
            Err(_) => defaults.port,
        };

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or(defaults.allowed_origins);

        Ok(Self {
            port,
            storage,
            database_url,
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.database_max_connections),
            skip_migrations: flag("SKIP_MIGRATIONS"),
            introspection_enabled: flag("GQL_INTROSPECTION"),
            playground_enabled: flag("GQL_PLAYGROUND"),
            allowed_origins,
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
        })
    }
}
