//! HTTP server initialization and runtime setup.

use crate::config::Config;
use crate::infrastructure::persistence::InMemoryUserRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the user store described by the configuration.
pub fn build_repository(config: &Config) -> InMemoryUserRepository {
    if config.seed_users {
        InMemoryUserRepository::seeded()
    } else {
        InMemoryUserRepository::new()
    }
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory user store (seeded unless disabled)
/// - Router wrapped in the request pipeline and trailing-slash normalisation
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = Arc::new(build_repository(&config));
    tracing::info!(seeded = config.seed_users, "User store initialized");

    let state = AppState::new(repository);
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
