use std::net::SocketAddr;

use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5001";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Startup settings read from the environment (and `.env` when present)
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Store endpoint. Required, there is no default.
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub sql_logging: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let bind_addr = parse_or(&lookup, "BIND_ADDR", || {
            DEFAULT_BIND_ADDR.parse().map_err(|_| ConfigError::Invalid {
                name: "BIND_ADDR",
                value: DEFAULT_BIND_ADDR.to_string(),
            })
        })?;
        let max_connections =
            parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", || Ok(DEFAULT_MAX_CONNECTIONS))?;
        let sql_logging = parse_or(&lookup, "DATABASE_SQL_LOGGING", || Ok(false))?;

        Ok(Self {
            database_url,
            bind_addr,
            max_connections,
            sql_logging,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: impl FnOnce() -> Result<T, ConfigError>,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => default(),
    }
}
