// Copyright (c) 2025 - Cowboy AI, Inc.
//! Service Layer for Todo Management
//!
//! This module provides the application service layer that orchestrates
//! domain validation and persistence.
//!
//! # Architecture
//!
//! ```text
//! Client Request (HTTP)
//!     ↓
//! Service Layer (this module)
//!     ↓
//! Value Objects → Todo Aggregate
//!     ↓
//! TodoRepository (memory | PostgreSQL)
//! ```
//!
//! # Design Principles
//!
//! 1. **Validation at the boundary**: requests carry primitives, the service
//!    builds value objects
//! 2. **One write per use case**: no multi-step transactions
//! 3. **Injected time**: the service owns the [`Clock`](crate::domain::Clock)
//! 4. **Async by Default**: All I/O is asynchronous
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use todo_service::repository::InMemoryTodoRepository;
//! use todo_service::service::{RepositoryTodoService, TodoCommandService, TodoIdRequest, TodoRequest};
//!
//! # tokio_test::block_on(async {
//! let service = RepositoryTodoService::new(Arc::new(InMemoryTodoRepository::new()));
//!
//! let todo = service.create(TodoRequest::unassigned("buy milk", false)).await.unwrap();
//! let found = service.find_by_id(TodoIdRequest::new(todo.id().as_u64())).await.unwrap();
//! assert_eq!(found.title().as_str(), "buy milk");
//! # });
//! ```

pub mod commands;
pub mod todo;

pub use commands::{TodoIdRequest, TodoRequest};
pub use todo::{Operation, RepositoryTodoService, ServiceError, ServiceResult, TodoCommandService};
