//! HTTP server setup and lifecycle.
//!
//! Builds the shared state (store + id allocator), binds the listener,
//! and runs the router with graceful shutdown support.

use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;

use crate::allocator::IdAllocator;
use crate::config::Config;
use crate::service;
use crate::storage::MessageStore;

/// State shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: MessageStore,
    pub allocator: Arc<IdAllocator>,
    pub page_size: u32,
}

/// Run the relay HTTP server.
///
/// Opens the store, seeds the allocator from it, and serves until the
/// shutdown signal fires. Startup failures (schema creation, seed lookup,
/// bind) are returned to the caller and are fatal.
pub async fn run_server(config: Config, mut shutdown_rx: watch::Receiver<bool>) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("invalid listen address")?;

    let (store, seed) = MessageStore::open(&config.db_path, config.pool_size)
        .with_context(|| format!("failed to open store at {}", config.db_path.display()))?;
    tracing::info!(seed, db_path = %config.db_path.display(), "Store opened");

    let allocator = Arc::new(IdAllocator::new(seed));

    let state = AppState {
        store,
        allocator,
        page_size: config.page_size,
    };

    let app = service::router(state, &config.index_path);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(address = %addr, "Starting relay HTTP server");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.changed().await;
            tracing::info!("Shutdown signal received, stopping server");
        })
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
