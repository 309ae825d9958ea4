//! # Users Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Build the Notion store adapter
//! - Create the user service
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use users_hex::{UserService, inbound::HttpServer};
use users_notion::NotionStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,users_app=debug,users_hex=debug,users_notion=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting users server on port {}", config.port);
    tracing::info!(
        base_url = %config.notion.base_url,
        database_id = %config.notion.database_id,
        "Using Notion database"
    );
    if config.api_token.is_none() {
        tracing::warn!("API_TOKEN not set, the users API is unauthenticated");
    }

    // Build the store, then the service on top of it
    let store = NotionStore::new(config.notion);
    let service = UserService::new(store);

    // Create and run the HTTP server
    let server = HttpServer::with_api_token(service, config.api_token);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
