pub mod config;
pub mod db;
pub mod dto;
pub mod error;
pub mod modules;
pub mod router;
pub mod utils;

use config::Config;
use db::DBClient;

#[derive(Debug, Clone)]
pub struct AppState {
    pub env: Config,
    pub db_client: DBClient,
}
