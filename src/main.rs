//! Contact Registry - Main entry point
//!
//! Connects to MongoDB, serves the registry over HTTP, and closes the store
//! client once the server has drained.

use anyhow::{Context, Result};
use contact_registry::repositories::{ContactRepository, MongoContactRepository};
use contact_registry::services::{ContactService, ContactServiceImpl};
use contact_registry::{server, AppState, Config};
use mongodb::bson::doc;
use mongodb::Client;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can drive the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let client = Client::with_uri_str(&config.mongodb_uri)
        .await
        .context("invalid MongoDB connection string")?;
    client
        .database(&config.database)
        .run_command(doc! { "ping": 1 }, None)
        .await
        .context("MongoDB did not answer ping")?;
    info!(
        "Connected to MongoDB database '{}', collection '{}'",
        config.database, config.collection
    );

    let repository = Arc::new(MongoContactRepository::new(
        &client,
        &config.database,
        &config.collection,
    )) as Arc<dyn ContactRepository>;
    let service = Arc::new(ContactServiceImpl::new(repository)) as Arc<dyn ContactService>;
    let app = server::router(AppState::new(service));

    let listener = TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address))?;
    info!("Listening on http://{}", config.bind_address);

    let served = server::run_server(listener, app).await;

    client.shutdown().await;
    info!("Contact registry shutdown complete");

    served
}
