// Copyright (c) 2025 - Cowboy AI, Inc.
//! Todo Repository Abstraction
//!
//! This module defines the persistence port consumed by the command
//! service, plus its storage adapters.
//!
//! # Architecture
//!
//! ```text
//! Command Service → TodoRepository → Storage (memory | PostgreSQL)
//! ```
//!
//! # Repository Requirements
//!
//! 1. **Single call per use case**: every write is one atomic storage call
//! 2. **Identity assignment**: a todo created with [`TodoId::UNASSIGNED`]
//!    receives an autoincremented id
//! 3. **Re-validation**: rows are rebuilt through the domain constructors,
//!    so a corrupt row surfaces as [`RepositoryError::CorruptRow`]
//! 4. **Not found is explicit**: lookups, updates and deletes that match
//!    no row return [`RepositoryError::NotFound`]
//!
//! # Example
//!
//! ```rust
//! use todo_service::domain::{Completed, SystemClock, Title, Todo, TodoId};
//! use todo_service::repository::{InMemoryTodoRepository, TodoRepository};
//!
//! # tokio_test::block_on(async {
//! let repository = InMemoryTodoRepository::new();
//! let todo = Todo::create(
//!     TodoId::UNASSIGNED,
//!     Title::new("write docs").unwrap(),
//!     Completed::new(false),
//!     &SystemClock,
//! );
//!
//! let stored = repository.create(todo).await.unwrap();
//! assert_eq!(stored.id(), TodoId::new(1));
//! # });
//! ```

use async_trait::async_trait;

use crate::domain::{DeletableTodo, Todo, TodoId};
use crate::errors::RepositoryResult;

pub mod memory;
#[cfg(feature = "postgres")]
pub mod postgres;

pub use memory::InMemoryTodoRepository;
#[cfg(feature = "postgres")]
pub use postgres::PostgresTodoRepository;

/// Repository trait for persisting and retrieving todos
///
/// Implementations own the translation between the aggregate and their
/// storage representation; the aggregate knows nothing about schema.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Read every todo
    ///
    /// Order is storage-defined. Returns an empty vector when there are none.
    async fn find_all(&self) -> RepositoryResult<Vec<Todo>>;

    /// Read a single todo
    ///
    /// # Errors
    ///
    /// - `NotFound` if no todo has this id
    async fn find_by_id(&self, id: TodoId) -> RepositoryResult<Todo>;

    /// Insert a todo
    ///
    /// A todo with [`TodoId::UNASSIGNED`] is given the next free id.
    ///
    /// # Returns
    ///
    /// The stored todo, carrying its assigned id
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` if an explicit id is taken
    /// - `Storage` if writing fails
    async fn create(&self, todo: Todo) -> RepositoryResult<Todo>;

    /// Overwrite an existing todo (last write wins)
    ///
    /// # Errors
    ///
    /// - `NotFound` if no row matched
    async fn update(&self, todo: &Todo) -> RepositoryResult<()>;

    /// Delete a todo by identifier
    ///
    /// # Errors
    ///
    /// - `NotFound` if no row matched
    async fn delete(&self, todo: DeletableTodo) -> RepositoryResult<()>;
}
