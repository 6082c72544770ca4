//! Q&A server binary
//!
//! Run with: cargo run --bin medask-server

use medask::{config::ServiceConfig, server::ApiServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "medask=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = ServiceConfig::load()?;

    tracing::info!("Configuration loaded");
    tracing::info!("  - Runner: {}", config.runner.base_url);
    tracing::info!("  - Primary model: {}", config.runner.primary_model);
    tracing::info!("  - Fallback model: {}", config.runner.fallback_model);
    tracing::info!("  - Token cap: {}", config.generation.max_new_tokens_cap);

    // Create the server; this resolves a usable model and aborts when
    // neither the primary nor the fallback is available
    let server = ApiServer::new(config).await?;

    println!("\nServer starting...");
    println!("  Status: http://{}/", server.address());
    println!("  Ask:    http://{}/ask", server.address());
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
