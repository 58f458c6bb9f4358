//! Tribute API — Entry Point
//!
//! Initializes configuration, logging, the collection store, and the
//! HTTP server. Runs until SIGINT.
//!
//! Wiring sequence:
//! 1. Load config.toml + validate
//! 2. Init tracing (JSON structured logging)
//! 3. Open the collection store + seed/repair backing files
//! 4. Spawn the API server (collections + /health)
//! 5. Wait for SIGINT → graceful shutdown (drain in-flight requests)

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tokio::sync::broadcast;
use tracing::{error, info};

mod api;
mod config;
mod domain;
mod store;

use api::server::ApiServer;
use store::CollectionStore;

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1. Load configuration from config.toml ──────────────
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());
    let config =
        config::loader::load_config(&config_path).context("Failed to load configuration")?;

    // ── 2. Initialize structured JSON logging ───────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.app.log_level)),
        )
        .json()
        .init();

    info!(
        name = %config.app.name,
        version = env!("CARGO_PKG_VERSION"),
        mode = ?config.storage.mode,
        "Starting tribute API"
    );

    // ── 3. Shutdown signal channel ──────────────────────────
    let (shutdown_tx, _shutdown_rx) = broadcast::channel::<()>(1);

    // ── 4. Open the collection store ────────────────────────
    let data_dir = config.storage.resolve_dir();
    let store = Arc::new(CollectionStore::new(&data_dir));
    store.initialize().await;

    // ── 5. Spawn the API server ─────────────────────────────
    let server = ApiServer::new(Arc::clone(&store), &config.server);
    let server_shutdown = shutdown_tx.subscribe();
    let server_handle = tokio::spawn(async move {
        if let Err(e) = server.run(server_shutdown).await {
            error!(error = %e, "API server failed");
        }
    });

    info!("Server spawned — tribute API is running");

    // ── 6. Wait for SIGINT ──────────────────────────────────
    signal::ctrl_c()
        .await
        .context("Failed to listen for SIGINT")?;
    info!("SIGINT received, initiating graceful shutdown");

    // Signal the server to stop accepting and drain in-flight requests.
    let _ = shutdown_tx.send(());

    let _ = tokio::time::timeout(std::time::Duration::from_secs(10), server_handle).await;

    info!("Shutdown complete");
    Ok(())
}
