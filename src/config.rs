use std::{env::var, str::FromStr};
use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} has an invalid value: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub frontend_url: Option<String>,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: u64,
    pub idle_timeout: u64,
    pub log_level: LevelFilter,
}

fn parse_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match var(key) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        _ => Ok(default),
    }
}

impl Config {
    pub fn init() -> Result<Self, ConfigError> {
        let database_url = var("DATABASE_URL").unwrap_or_else(|_| "sqlite://main.db".to_string());
        let frontend_url = var("FRONTEND_URL").ok().filter(|url| !url.trim().is_empty());
        Ok(Self {
            port: parse_or("PORT", 8000)?,
            database_url,
            frontend_url,
            max_connections: parse_or("MAX_CONNECTIONS", 5)?,
            min_connections: parse_or("MIN_CONNECTIONS", 1)?,
            acquire_timeout: parse_or("ACQUIRE_TIMEOUT", 5)?,
            idle_timeout: parse_or("IDLE_TIMEOUT", 600)?,
            log_level: parse_or("LOG_LEVEL", LevelFilter::INFO)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            database_url: "sqlite://main.db".to_string(),
            frontend_url: None,
            max_connections: 5,
            min_connections: 1,
            acquire_timeout: 5,
            idle_timeout: 600,
            log_level: LevelFilter::INFO,
        }
    }
}
