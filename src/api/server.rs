//! API Server - Router Assembly and Serve Loop
//!
//! Builds the axum router for the four collection endpoints plus a
//! health probe, wraps it in a permissive CORS layer (the browser
//! frontend may be served from a different origin, and preflight
//! OPTIONS requests must succeed), and serves it with graceful
//! shutdown on a broadcast signal.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tokio::sync::broadcast;
use tower_http::cors::CorsLayer;
use tracing::info;

use super::handlers;
use crate::config::ServerConfig;
use crate::store::CollectionStore;

/// Assemble the application router.
///
/// Unmatched methods on a known path get 405 from axum's method
/// router; CORS preflight is answered by the layer before dispatch.
pub fn router(store: Arc<CollectionStore>) -> Router {
    Router::new()
        .route(
            "/api/wishes",
            get(handlers::list_wishes).post(handlers::create_wish),
        )
        .route(
            "/api/pledges",
            get(handlers::list_pledges).post(handlers::create_pledge),
        )
        .route(
            "/api/nominations",
            get(handlers::list_nominations).post(handlers::create_nomination),
        )
        .route(
            "/api/postcards",
            get(handlers::list_postcards).post(handlers::create_postcard),
        )
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(store)
}

/// Health probe: 200 while the data directory is writable.
async fn health(State(store): State<Arc<CollectionStore>>) -> impl IntoResponse {
    if store.is_healthy().await {
        (StatusCode::OK, "OK")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "NOT READY")
    }
}

/// Axum-based API server with graceful shutdown.
pub struct ApiServer {
    /// Shared collection store.
    store: Arc<CollectionStore>,
    /// Bind address from config.
    host: String,
    /// Bind port from config.
    port: u16,
}

impl ApiServer {
    /// Create a new API server.
    pub fn new(store: Arc<CollectionStore>, config: &ServerConfig) -> Self {
        Self {
            store,
            host: config.host.clone(),
            port: config.port,
        }
    }

    /// Serve until the shutdown signal fires, then drain and return.
    pub async fn run(self, mut shutdown_rx: broadcast::Receiver<()>) -> anyhow::Result<()> {
        let app = router(self.store);

        let addr = format!("{}:{}", self.host, self.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!(address = %addr, "API server started");

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.recv().await;
            })
            .await?;

        Ok(())
    }
}
