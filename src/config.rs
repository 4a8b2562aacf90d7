use std::net::{Ipv4Addr, SocketAddr};

use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "sqlite://footballdatabase.db";
const DEFAULT_POOL_SIZE: u32 = 5;
const DEFAULT_HOST: Ipv4Addr = Ipv4Addr::LOCALHOST;
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} is not in the correct format: {value:?}")]
    Invalid { name: &'static str, value: String },
    #[error("DB_POOL_SIZE must be at least 1")]
    EmptyPool,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub addr: SocketAddr,
}

impl Config {
    /// Reads configuration from the process environment (and `.env`, if the
    /// caller loaded it first).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let pool_size = parse_or(&lookup, "DB_POOL_SIZE", DEFAULT_POOL_SIZE)?;
        if pool_size == 0 {
            return Err(ConfigError::EmptyPool);
        }

        let host: Ipv4Addr = parse_or(&lookup, "HOST", DEFAULT_HOST)?;
        let port: u16 = parse_or(&lookup, "PORT", DEFAULT_PORT)?;

        Ok(Self {
            database: DatabaseConfig { url, pool_size },
            addr: SocketAddr::from((host, port)),
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
