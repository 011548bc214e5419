// Copyright (c) 2025 - Cowboy AI, Inc.
//! Todo Command Service
//!
//! Application service orchestrating the todo use cases:
//! - Boundary validation of primitive request data into value objects
//! - Aggregate operations with an injected clock
//! - Exactly one repository write per mutating use case
//!
//! # Use Case Flow
//!
//! ```text
//! TodoRequest → validate Title → (load Todo) → mutate → Repository write
//! ```
//!
//! Failures are annotated with the failing operation
//! (`failed to create todo: …`) and never retried.

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use super::commands::{TodoIdRequest, TodoRequest};
use crate::domain::{Clock, Completed, SystemClock, Title, Todo, TodoId, ValidationError};
use crate::errors::RepositoryError;
use crate::repository::TodoRepository;

/// Service layer result type
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Use case named in error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
    Delete,
    FindAll,
    FindById,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Create => "create todo",
            Operation::Update => "update todo",
            Operation::Delete => "delete todo",
            Operation::FindAll => "find all todos",
            Operation::FindById => "find todo by id",
        };
        f.write_str(name)
    }
}

/// Service layer errors
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Request data failed domain validation
    #[error("failed to {operation}: title is invalid: {source}")]
    InvalidInput {
        operation: Operation,
        #[source]
        source: ValidationError,
    },

    /// No todo with the requested identifier
    #[error("failed to {operation}: todo {id} not found")]
    NotFound { operation: Operation, id: TodoId },

    /// Storage failure
    #[error("failed to {operation}: {source}")]
    Persistence {
        operation: Operation,
        #[source]
        source: RepositoryError,
    },
}

impl ServiceError {
    fn invalid_input(operation: Operation) -> impl FnOnce(ValidationError) -> Self {
        move |source| ServiceError::InvalidInput { operation, source }
    }

    fn from_repository(operation: Operation) -> impl FnOnce(RepositoryError) -> Self {
        move |source| match source {
            RepositoryError::NotFound(id) => ServiceError::NotFound { operation, id },
            source => ServiceError::Persistence { operation, source },
        }
    }

    /// Operation that failed
    pub fn operation(&self) -> Operation {
        match self {
            ServiceError::InvalidInput { operation, .. }
            | ServiceError::NotFound { operation, .. }
            | ServiceError::Persistence { operation, .. } => *operation,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::NotFound { .. })
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ServiceError::InvalidInput { .. })
    }

    pub fn is_persistence(&self) -> bool {
        matches!(self, ServiceError::Persistence { .. })
    }

    fn log(&self) {
        match self {
            ServiceError::InvalidInput { .. } | ServiceError::NotFound { .. } => {
                warn!(error = %self, "Todo request rejected");
            }
            ServiceError::Persistence { .. } => {
                error!(error = %self, "Todo storage failure");
            }
        }
    }
}

/// Todo command service trait
///
/// The contract the HTTP layer consumes. Every operation takes primitive
/// request data and validates it here.
#[async_trait]
pub trait TodoCommandService: Send + Sync {
    /// Create a todo
    ///
    /// # Returns
    /// - The stored todo with its assigned identifier
    ///
    /// # Errors
    /// - `InvalidInput` if the title fails validation
    /// - `Persistence` if the write fails
    async fn create(&self, request: TodoRequest) -> ServiceResult<Todo>;

    /// Replace the title and completion flag of an existing todo
    ///
    /// The todo is loaded first; nothing is written when it is missing or the
    /// new title is invalid.
    ///
    /// # Errors
    /// - `NotFound` if no todo has `request.id`
    /// - `InvalidInput` if the title fails validation
    /// - `Persistence` if the write fails
    async fn update(&self, request: TodoRequest) -> ServiceResult<Todo>;

    /// Delete an existing todo
    ///
    /// # Errors
    /// - `NotFound` if no todo has `request.id`
    async fn delete(&self, request: TodoIdRequest) -> ServiceResult<()>;

    /// All todos in storage order; empty when there are none
    async fn find_all(&self) -> ServiceResult<Vec<Todo>>;

    /// A single todo
    ///
    /// # Errors
    /// - `NotFound` if no todo has `request.id`
    async fn find_by_id(&self, request: TodoIdRequest) -> ServiceResult<Todo>;
}

/// Repository-backed implementation of [`TodoCommandService`]
///
/// Holds no mutable state; share it behind an `Arc`.
pub struct RepositoryTodoService {
    repository: Arc<dyn TodoRepository>,
    clock: Arc<dyn Clock>,
}

impl RepositoryTodoService {
    /// Create a service reading time from the system clock
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self::with_clock(repository, Arc::new(SystemClock))
    }

    /// Create a service with an explicit clock
    pub fn with_clock(repository: Arc<dyn TodoRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Load a todo, mapping a missing row to `NotFound` for `operation`
    async fn load(&self, id: TodoId, operation: Operation) -> ServiceResult<Todo> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(ServiceError::from_repository(operation))
    }
}

impl fmt::Debug for RepositoryTodoService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepositoryTodoService").finish_non_exhaustive()
    }
}

#[async_trait]
impl TodoCommandService for RepositoryTodoService {
    async fn create(&self, request: TodoRequest) -> ServiceResult<Todo> {
        debug!(todo_id = request.id, "Creating todo");

        let title = Title::new(request.title)
            .map_err(ServiceError::invalid_input(Operation::Create))
            .inspect_err(ServiceError::log)?;
        let todo = Todo::create(
            TodoId::new(request.id),
            title,
            Completed::new(request.completed),
            self.clock.as_ref(),
        );

        let todo = self
            .repository
            .create(todo)
            .await
            .map_err(ServiceError::from_repository(Operation::Create))
            .inspect_err(ServiceError::log)?;

        info!(todo_id = %todo.id(), "Created todo");
        Ok(todo)
    }

    async fn update(&self, request: TodoRequest) -> ServiceResult<Todo> {
        let id = request.todo_id();
        debug!(todo_id = %id, "Updating todo");

        let mut todo = self
            .load(id, Operation::Update)
            .await
            .inspect_err(ServiceError::log)?;
        let title = Title::new(request.title)
            .map_err(ServiceError::invalid_input(Operation::Update))
            .inspect_err(ServiceError::log)?;

        todo.update_title(title, self.clock.as_ref());
        todo.update_completed(Completed::new(request.completed), self.clock.as_ref());

        self.repository
            .update(&todo)
            .await
            .map_err(ServiceError::from_repository(Operation::Update))
            .inspect_err(ServiceError::log)?;

        info!(todo_id = %id, "Updated todo");
        Ok(todo)
    }

    async fn delete(&self, request: TodoIdRequest) -> ServiceResult<()> {
        let id = request.todo_id();
        debug!(todo_id = %id, "Deleting todo");

        let todo = self
            .load(id, Operation::Delete)
            .await
            .inspect_err(ServiceError::log)?;

        self.repository
            .delete(todo.to_deletable())
            .await
            .map_err(ServiceError::from_repository(Operation::Delete))
            .inspect_err(ServiceError::log)?;

        info!(todo_id = %id, "Deleted todo");
        Ok(())
    }

    async fn find_all(&self) -> ServiceResult<Vec<Todo>> {
        let todos = self
            .repository
            .find_all()
            .await
            .map_err(ServiceError::from_repository(Operation::FindAll))
            .inspect_err(ServiceError::log)?;

        debug!(count = todos.len(), "Found todos");
        Ok(todos)
    }

    async fn find_by_id(&self, request: TodoIdRequest) -> ServiceResult<Todo> {
        self.load(request.todo_id(), Operation::FindById)
            .await
            .inspect_err(ServiceError::log)
    }
}
