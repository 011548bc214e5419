// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for storage operations

use thiserror::Error;

use crate::domain::{TodoId, ValidationError};

/// Errors that can occur in repository operations
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No row matches the identifier
    #[error("todo {0} not found")]
    NotFound(TodoId),

    /// A row with the identifier already exists
    #[error("todo {0} already exists")]
    AlreadyExists(TodoId),

    /// Stored row violates a domain invariant
    #[error("stored todo {id} is invalid: {source}")]
    CorruptRow {
        id: TodoId,
        #[source]
        source: ValidationError,
    },

    /// Connection, query or constraint failure in the storage engine
    #[error("storage error: {0}")]
    Storage(String),
}

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl RepositoryError {
    /// Whether the error means the todo does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(feature = "postgres")]
impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        RepositoryError::Storage(err.to_string())
    }
}
