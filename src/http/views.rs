// Copyright (c) 2025 - Cowboy AI, Inc.
//! Wire representations of todos

use serde::{Deserialize, Serialize};

use crate::domain::Todo;
use crate::service::TodoRequest;

/// JSON rendering of a todo
///
/// ```json
/// { "id": 1, "title": "buy milk", "completed": false,
///   "last_update": "2024-09-04 12:00:00", "created_at": "2024-09-04 12:00:00" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoView {
    pub id: u64,
    pub title: String,
    pub completed: bool,
    pub last_update: String,
    pub created_at: String,
}

impl From<&Todo> for TodoView {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id().as_u64(),
            title: todo.title().as_str().to_string(),
            completed: todo.completed().as_bool(),
            last_update: todo.last_update().to_canonical_string(),
            created_at: todo.created_at().to_canonical_string(),
        }
    }
}

/// Body of create and update requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoBody {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl TodoBody {
    /// Build the service request for the todo at `id`
    pub fn into_request(self, id: u64) -> TodoRequest {
        TodoRequest::new(id, self.title, self.completed)
    }
}
