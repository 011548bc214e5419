// Copyright (c) 2025 - Cowboy AI, Inc.
//! Service wiring
//!
//! Builds the storage adapter and command service described by a
//! [`ServiceConfig`].

use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::ServiceConfig;
use crate::repository::{InMemoryTodoRepository, TodoRepository};
use crate::service::{RepositoryTodoService, TodoCommandService};

/// Construct the repository selected by `config`
///
/// With a DSN, connects to PostgreSQL and ensures the `todos` table exists.
/// Without one, falls back to in-memory storage.
pub async fn build_repository(config: &ServiceConfig) -> Result<Arc<dyn TodoRepository>> {
    match config.dsn.as_deref() {
        Some(dsn) => connect_database(dsn, config.max_connections).await,
        None => {
            warn!("DSN not set, todos are kept in memory and lost on restart");
            Ok(Arc::new(InMemoryTodoRepository::new()))
        }
    }
}

#[cfg(feature = "postgres")]
async fn connect_database(dsn: &str, max_connections: u32) -> Result<Arc<dyn TodoRepository>> {
    use anyhow::Context;
    use crate::repository::PostgresTodoRepository;

    let repository = PostgresTodoRepository::connect(dsn, max_connections)
        .await
        .context("Failed to connect to PostgreSQL")?;
    repository
        .initialize()
        .await
        .context("Failed to create todos table")?;
    info!("Using PostgreSQL storage");
    Ok(Arc::new(repository))
}

#[cfg(not(feature = "postgres"))]
async fn connect_database(_dsn: &str, _max_connections: u32) -> Result<Arc<dyn TodoRepository>> {
    anyhow::bail!("DSN is set but this build has no PostgreSQL support (enable the `postgres` feature)")
}

/// Construct the command service selected by `config`
pub async fn build_service(config: &ServiceConfig) -> Result<Arc<dyn TodoCommandService>> {
    let repository = build_repository(config).await?;
    info!("Todo command service ready");
    Ok(Arc::new(RepositoryTodoService::new(repository)))
}
