use std::{process::exit, sync::Arc};
use dotenv::dotenv;
use log::{error, info};
use page_comments_api::{AppState, config::Config, db::DBClient, router};

#[tokio::main]
async fn main() {
    dotenv().ok();
    let config = match Config::init() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Invalid configuration: {}", err);
            exit(1);
        }
    };
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    let db_client = match DBClient::connect(&config).await {
        Ok(db_client) => {
            info!("Connected to the database at {}", &config.database_url);
            db_client
        }
        Err(err) => {
            error!("Failed to connect to the database: {:?}", err);
            exit(1);
        }
    };
    if let Err(err) = db_client.migrate().await {
        error!("Failed to migrate the database schema: {:?}", err);
        exit(1);
    }
    let app_state = AppState {
        env: config.clone(),
        db_client,
    };
    let app = router::create_router(Arc::new(app_state));
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{}", &config.port)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind port {}: {}", &config.port, err);
            exit(1);
        }
    };
    info!("Server is running on http://localhost:{}", &config.port);
    info!("Endpoints:");
    info!("  GET  /comments?uri=<uri>&page=1&page_size=10");
    info!("  POST /comments?uri=<uri>");
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {}", err);
        exit(1);
    }
}
