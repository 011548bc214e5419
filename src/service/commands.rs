// Copyright (c) 2025 - Cowboy AI, Inc.
//! Command Requests for the Todo Service
//!
//! Requests carry plain primitive fields exactly as they arrive from the
//! boundary. Turning them into validated value objects is the service's job,
//! so a request can always be constructed, even with an invalid title.

use serde::{Deserialize, Serialize};

use crate::domain::TodoId;

/// Request to create or update a todo
///
/// On create, an `id` of 0 lets storage assign the identifier. On update,
/// `id` selects the todo to change.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TodoRequest {
    /// Target identifier (0 lets storage assign one on create)
    #[serde(default)]
    pub id: u64,

    /// Raw title text, validated by the service
    pub title: String,

    /// Completion flag
    #[serde(default)]
    pub completed: bool,
}

impl TodoRequest {
    pub fn new(id: u64, title: impl Into<String>, completed: bool) -> Self {
        Self {
            id,
            title: title.into(),
            completed,
        }
    }

    /// Request for a new todo whose id storage assigns
    pub fn unassigned(title: impl Into<String>, completed: bool) -> Self {
        Self::new(0, title, completed)
    }

    pub fn todo_id(&self) -> TodoId {
        TodoId::new(self.id)
    }
}

/// Request addressing a todo by identifier only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoIdRequest {
    pub id: u64,
}

impl TodoIdRequest {
    pub fn new(id: u64) -> Self {
        Self { id }
    }

    pub fn todo_id(&self) -> TodoId {
        TodoId::new(self.id)
    }
}
