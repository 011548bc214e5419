// Copyright (c) 2025 - Cowboy AI, Inc.
//! Todo HTTP Server
//!
//! Serves the todo CRUD API over HTTP.
//!
//! Run with: cargo run --bin todo-server --features http,postgres
//!
//! Configuration comes from the environment, falling back to a `.env` file
//! in the working directory (see `ServiceConfig`):
//! 1. `DSN` - PostgreSQL connection string; unset keeps todos in memory
//! 2. `BIND_ADDR` - listen address (default 0.0.0.0:8080)
//! 3. `API_PREFIX` - route prefix (default /api/v1)

use anyhow::{Context, Result};
use todo_service::{app, http, ServiceConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("🚀 Starting todo server");

    let config = ServiceConfig::load().context("Invalid configuration")?;
    info!("📋 Configuration loaded:");
    info!("  - Bind address: {}", config.bind_addr);
    info!("  - API prefix: {}", config.api_prefix);
    info!("  - Database: {}", if config.uses_database() { "postgres" } else { "memory" });

    let service = app::build_service(&config).await?;
    let router = http::router(http::AppState::new(service), &config.api_prefix);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("✅ Listening on {}", config.bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("⚠️ Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
