// Copyright (c) 2025 - Cowboy AI, Inc.
//! HTTP adapter for the todo service
//!
//! Binds JSON requests to [`TodoCommandService`] calls and renders todos in
//! their wire shape.
//!
//! # Routes
//!
//! ```text
//! GET    {prefix}/            → "Hello, World!"
//! GET    {prefix}/todos       → [TodoView]
//! GET    {prefix}/todos/:id   → TodoView | 404
//! POST   {prefix}/todos       → 201 TodoView | 400
//! PUT    {prefix}/todos/:id   → TodoView | 400 | 404
//! DELETE {prefix}/todos/:id   → 204 | 404
//! GET    /health              → "ok"
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use todo_service::http::{router, AppState};
//! use todo_service::repository::InMemoryTodoRepository;
//! use todo_service::service::RepositoryTodoService;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = RepositoryTodoService::new(Arc::new(InMemoryTodoRepository::new()));
//!     let app = router(AppState::new(Arc::new(service)), "/api/v1");
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::service::TodoCommandService;

pub mod error;
pub mod handlers;
pub mod views;

pub use error::{ApiError, ErrorBody};
pub use views::{TodoBody, TodoView};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn TodoCommandService>,
}

impl AppState {
    pub fn new(service: Arc<dyn TodoCommandService>) -> Self {
        Self { service }
    }
}

/// Build the router with the todo routes mounted under `prefix`
///
/// `prefix` is either empty or starts with `/` and has no trailing slash
/// (see [`ServiceConfig::api_prefix`](crate::config::ServiceConfig)).
pub fn router(state: AppState, prefix: &str) -> Router {
    let collection = format!("{prefix}/todos");
    let member = format!("{prefix}/todos/:id");
    let root = format!("{prefix}/");

    Router::new()
        .route(&root, get(handlers::hello))
        .route(
            &collection,
            get(handlers::find_all).post(handlers::create),
        )
        .route(
            &member,
            get(handlers::find_by_id)
                .put(handlers::update)
                .delete(handlers::delete),
        )
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
