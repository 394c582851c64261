/**
 * Shopfront Server Entry Point
 *
 * This is the main entry point for the shopfront backend server. It
 * initializes the Axum HTTP server, serves until interrupted, then tears
 * down the store connection.
 */

use shopfront::backend::server::config::ServerConfig;
use shopfront::backend::server::init::{create_app, shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    // Initialize tracing; RUST_LOG overrides the default level
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = ServerConfig::from_env();
    let (app, state) = create_app(&config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("[Server] Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Serve loop has ended; release the store connection and the
    // subscriber handles held through the broadcast channel.
    shutdown(state).await;

    Ok(())
}

/// Resolve when the process receives ctrl-c
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("[Server] Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("[Server] Shutdown signal received");
}
