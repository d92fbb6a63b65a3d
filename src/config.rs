use std::env;
use std::str::FromStr;

use crate::errors::ConfigError;

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum StoreConfig {
    Postgres(DatabaseConfig),
    Memory,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub bind_address: String,
    pub store: StoreConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests don't have to
    /// touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_address = lookup("BIND_ADDRESS")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let store_kind = lookup("EMPLOYEE_STORE").unwrap_or_else(|| "postgres".to_string());
        let store = match store_kind.trim().to_lowercase().as_str() {
            "memory" => StoreConfig::Memory,
            "postgres" => {
                let url = lookup("DATABASE_URL")
                    .filter(|v| !v.trim().is_empty())
                    .ok_or(ConfigError::Missing("DATABASE_URL"))?;
                StoreConfig::Postgres(DatabaseConfig {
                    url,
                    max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
                    acquire_timeout_secs: parse_or(
                        &lookup,
                        "DB_ACQUIRE_TIMEOUT_SECS",
                        DEFAULT_ACQUIRE_TIMEOUT_SECS,
                    )?,
                })
            }
            _ => {
                return Err(ConfigError::Invalid { key: "EMPLOYEE_STORE", value: store_kind });
            }
        };

        Ok(Self { bind_address, store })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => Ok(default),
    }
}
