use std::{str::FromStr, time::Duration};
use sqlx::{
    Error as SqlxError, Pool, Sqlite,
    migrate::MigrateError,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use crate::config::Config;

#[derive(Debug, Clone)]
pub struct DBClient {
    pub pool: Pool<Sqlite>,
}

impl DBClient {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
    pub async fn connect(config: &Config) -> Result<Self, SqlxError> {
        let options = SqliteConnectOptions::from_str(&config.database_url)?
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .connect_with(options)
            .await?;
        Ok(Self::new(pool))
    }
    pub async fn migrate(&self) -> Result<(), MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}
