//! Load database settings from `DB_*` environment variables.

use crate::config::types::{DbConfig, DEFAULT_DB_HOST, DEFAULT_DB_PORT};
use crate::error::ConfigError;

impl DbConfig {
    /// Read `DB_HOST`, `DB_USER`, `DB_PASSWORD`, `DB_NAME` and `DB_PORT` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let port = match get("DB_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|source| ConfigError::InvalidPort {
                value: raw.clone(),
                source,
            })?,
            None => DEFAULT_DB_PORT,
        };
        Ok(DbConfig {
            host: get("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.to_string()),
            user: get("DB_USER"),
            password: get("DB_PASSWORD"),
            database: get("DB_NAME"),
            port,
        })
    }
}
