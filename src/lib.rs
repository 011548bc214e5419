// Copyright (c) 2025 - Cowboy AI, Inc.
//! Todo domain model, command service and CRUD adapters
//!
//! Layering:
//!
//! ```text
//! http (feature "http") → service → domain
//!                            ↓
//!                        repository (memory | postgres)
//! ```
//!
//! - [`domain`] - value objects, clock and the `Todo` aggregate
//! - [`service`] - command service validating primitive requests
//! - [`repository`] - persistence port and storage adapters
//! - [`config`] / [`app`] - environment configuration and wiring

pub mod app;
pub mod config;
pub mod domain;
pub mod errors;
#[cfg(feature = "http")]
pub mod http;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use config::{ConfigError, ServiceConfig};
pub use domain::{Clock, Completed, DeletableTodo, SystemClock, Title, Todo, TodoId, ValidationError};
pub use errors::{RepositoryError, RepositoryResult};
pub use repository::{InMemoryTodoRepository, TodoRepository};
pub use service::{
    RepositoryTodoService, ServiceError, ServiceResult, TodoCommandService, TodoIdRequest,
    TodoRequest,
};
