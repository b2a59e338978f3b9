//! Server configuration from environment variables (optionally via `.env`).

use crate::error::ConfigError;
use std::str::FromStr;

/// Which [`crate::store::MovieStore`] implementation backs the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "pg" => Ok(StoreBackend::Postgres),
            "memory" | "mem" => Ok(StoreBackend::Memory),
            other => Err(ConfigError::UnknownStore(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
    pub store: StoreBackend,
    /// Maximum accepted request body, in bytes.
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            database_url: "postgres://localhost/movies".into(),
            max_connections: 5,
            store: StoreBackend::Postgres,
            body_limit_bytes: 1024 * 1024,
        }
    }
}

impl ServerConfig {
    /// Load from the process environment.
    ///
    /// | Env var              | Default                       |
    /// |----------------------|-------------------------------|
    /// | `HOST`               | `0.0.0.0`                     |
    /// | `PORT`               | `3000`                        |
    /// | `DATABASE_URL`       | `postgres://localhost/movies` |
    /// | `DB_MAX_CONNECTIONS` | `5`                           |
    /// | `STORE`              | `postgres`                    |
    /// | `BODY_LIMIT_BYTES`   | `1048576`                     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "PORT", defaults.port)?,
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS", defaults.max_connections)?,
            store: match lookup("STORE") {
                Some(s) => s.parse()?,
                None => defaults.store,
            },
            body_limit_bytes: parse_var(&lookup, "BODY_LIMIT_BYTES", defaults.body_limit_bytes)?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidVar { var, value }),
        None => Ok(default),
    }
}
