//! HTTP server initialization and runtime setup.
//!
//! Wires the store and registry, builds the router, and runs the Axum
//! server until a shutdown signal arrives.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;

use crate::application::services::Registry;
use crate::config::Config;
use crate::domain::clock::SystemClock;
use crate::infrastructure::persistence::JsonFileStore;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code::RandomCodes;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - JSON file store (loaded once into the registry)
/// - Registry with system clock and random code generator
/// - Axum HTTP server with graceful shutdown on SIGINT
///
/// # Errors
///
/// Returns an error if the store cannot be read, the bind fails, or the
/// server errors at runtime.
pub async fn run(config: Config) -> Result<()> {
    let store = Arc::new(JsonFileStore::new(&config.store_path));

    let registry = Registry::init(
        store,
        Arc::new(SystemClock),
        Arc::new(RandomCodes),
        config.default_validity_minutes,
    )
    .await?;

    let state = AppState::new(Arc::new(registry), config.base_url.clone());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
