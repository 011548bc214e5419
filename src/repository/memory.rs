// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-memory todo storage
//!
//! Backs the service when no database is configured, and is the default
//! collaborator in tests. Rows are kept in a `BTreeMap` so `find_all`
//! returns todos in id order.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::TodoRepository;
use crate::domain::{DeletableTodo, Todo, TodoId};
use crate::errors::{RepositoryError, RepositoryResult};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<TodoId, Todo>,
    next_id: u64,
}

impl Table {
    fn assign_id(&mut self) -> TodoId {
        // Skip ids already taken by explicit inserts
        loop {
            self.next_id += 1;
            let id = TodoId::new(self.next_id);
            if !self.rows.contains_key(&id) {
                return id;
            }
        }
    }
}

/// Todo repository held in process memory
///
/// Clones share the same table.
#[derive(Clone, Debug)]
pub struct InMemoryTodoRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryTodoRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(Table::default())),
        }
    }

    /// Number of stored todos
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    /// Whether the repository holds no todos
    pub async fn is_empty(&self) -> bool {
        self.table.read().await.rows.is_empty()
    }
}

impl Default for InMemoryTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Todo>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: TodoId) -> RepositoryResult<Todo> {
        let table = self.table.read().await;
        table
            .rows
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn create(&self, todo: Todo) -> RepositoryResult<Todo> {
        let mut table = self.table.write().await;

        let todo = if todo.id().is_assigned() {
            if table.rows.contains_key(&todo.id()) {
                return Err(RepositoryError::AlreadyExists(todo.id()));
            }
            todo
        } else {
            let id = table.assign_id();
            todo.with_id(id)
        };

        debug!(todo_id = %todo.id(), "Inserted todo in memory");
        table.rows.insert(todo.id(), todo.clone());
        Ok(todo)
    }

    async fn update(&self, todo: &Todo) -> RepositoryResult<()> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&todo.id()) {
            Some(row) => {
                *row = todo.clone();
                debug!(todo_id = %todo.id(), "Updated todo in memory");
                Ok(())
            }
            None => Err(RepositoryError::NotFound(todo.id())),
        }
    }

    async fn delete(&self, todo: DeletableTodo) -> RepositoryResult<()> {
        let mut table = self.table.write().await;
        table
            .rows
            .remove(&todo.id())
            .map(|_| debug!(todo_id = %todo.id(), "Deleted todo from memory"))
            .ok_or(RepositoryError::NotFound(todo.id()))
    }
}
