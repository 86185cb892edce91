//! # Rental API Server
//!
//! HTTP server for the rental reports and customer CRUD endpoints.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Rental API Server                                │
//! │                                                                         │
//! │  Client ───► HTTP (5000) ───► Handlers ───► Repositories ───► SQLite   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each request acquires pooled store connections per query; the pool guard
//! releases them on every exit path. No state is shared between requests
//! beyond the pool itself.

use actix_web::{web, App, HttpServer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rental_api::config::ApiConfig;
use rental_api::handlers;
use rental_db::{Database, DbConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting rental API server...");

    // Load configuration
    let config = ApiConfig::load().map_err(std::io::Error::other)?;
    info!(
        host = %config.http_host,
        port = config.http_port,
        db = %config.database_path,
        "Configuration loaded"
    );

    // Connect to the database (bootstraps the schema on first run)
    let db_config = DbConfig::new(&config.database_path).max_connections(config.max_connections);
    let db = Database::new(db_config).await.map_err(std::io::Error::other)?;
    info!("Database ready");

    let data = web::Data::new(db);
    let bind_addr = (config.http_host.clone(), config.http_port);

    info!("Listening on http://{}:{}", config.http_host, config.http_port);

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(handlers::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
