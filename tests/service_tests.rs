// Copyright (c) 2025 - Cowboy AI, Inc.
//! Integration tests for the todo command service
//!
//! These tests drive the complete use-case flow against in-memory storage:
//! 1. Primitive request → validated value objects
//! 2. Aggregate operation with a deterministic clock
//! 3. Single repository write

mod fixtures;

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use fixtures::{memory_service, seed, ticking_clock, todo_fixture};
use todo_service::domain::{DeletableTodo, Todo, TodoId};
use todo_service::errors::RepositoryResult;
use todo_service::repository::{InMemoryTodoRepository, TodoRepository};
use todo_service::service::{
    Operation, RepositoryTodoService, TodoCommandService, TodoIdRequest, TodoRequest,
};

/// Wraps the in-memory repository and counts write calls
#[derive(Default)]
struct CountingRepository {
    inner: InMemoryTodoRepository,
    creates: AtomicUsize,
    updates: AtomicUsize,
    deletes: AtomicUsize,
}

impl CountingRepository {
    fn writes(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
            + self.updates.load(Ordering::SeqCst)
            + self.deletes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TodoRepository for CountingRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Todo>> {
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: TodoId) -> RepositoryResult<Todo> {
        self.inner.find_by_id(id).await
    }

    async fn create(&self, todo: Todo) -> RepositoryResult<Todo> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        self.inner.create(todo).await
    }

    async fn update(&self, todo: &Todo) -> RepositoryResult<()> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.inner.update(todo).await
    }

    async fn delete(&self, todo: DeletableTodo) -> RepositoryResult<()> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.inner.delete(todo).await
    }
}

fn counting_service() -> (RepositoryTodoService, Arc<CountingRepository>) {
    let repository = Arc::new(CountingRepository::default());
    let service = RepositoryTodoService::with_clock(repository.clone(), ticking_clock());
    (service, repository)
}

#[tokio::test]
async fn test_create_todo_succeeds() {
    let (service, repository) = memory_service();

    let todo = service
        .create(TodoRequest::new(1, "title", false))
        .await
        .expect("create should succeed");

    assert_eq!(todo.id(), TodoId::new(1));
    assert_eq!(todo.created_at().as_datetime(), todo.last_update().as_datetime());
    assert_eq!(repository.len().await, 1);
}

#[tokio::test]
async fn test_create_assigns_id_when_zero() {
    let (service, _) = memory_service();

    let first = service.create(TodoRequest::unassigned("a", false)).await.unwrap();
    let second = service.create(TodoRequest::unassigned("b", true)).await.unwrap();

    assert!(first.id().is_assigned());
    assert_ne!(first.id(), second.id());
}

#[tokio::test]
async fn test_create_with_invalid_title_writes_nothing() {
    let (service, repository) = counting_service();

    let err = service
        .create(TodoRequest::unassigned("a".repeat(101), false))
        .await
        .unwrap_err();

    assert!(err.is_invalid_input());
    assert!(err.to_string().contains("too long"));
    assert_eq!(repository.writes(), 0);
}

/// Scenario: create(id=1, "old_title") → update("new_title", true) → find
#[tokio::test]
async fn test_update_after_create() {
    let (service, repository) = memory_service();
    seed(repository.as_ref(), 1, "old_title").await;

    service
        .update(TodoRequest::new(1, "new_title", true))
        .await
        .expect("update should succeed");

    let found = service.find_by_id(TodoIdRequest::new(1)).await.unwrap();
    assert_eq!(found.title().as_str(), "new_title");
    assert!(found.completed().as_bool());
    assert!(found.last_update().as_datetime() > found.created_at().as_datetime());
}

#[tokio::test]
async fn test_update_keeps_created_at() {
    let (service, _) = memory_service();
    let created = service
        .create(TodoRequest::new(1, "title", false))
        .await
        .unwrap();

    let updated = service
        .update(TodoRequest::new(1, "title", false))
        .await
        .unwrap();

    assert_eq!(updated.created_at(), created.created_at());
    assert!(updated.last_update() > created.last_update());
}

#[tokio::test]
async fn test_update_missing_todo_is_not_found_without_write() {
    let (service, repository) = counting_service();

    let err = service
        .update(TodoRequest::new(99, "title", true))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.operation(), Operation::Update);
    assert_eq!(repository.writes(), 0);
}

#[tokio::test]
async fn test_update_with_invalid_title_writes_nothing() {
    let (service, repository) = counting_service();
    service.create(TodoRequest::new(1, "title", false)).await.unwrap();

    let err = service
        .update(TodoRequest::new(1, "", true))
        .await
        .unwrap_err();

    assert!(err.is_invalid_input());
    assert_eq!(repository.updates.load(Ordering::SeqCst), 0);

    let unchanged = service.find_by_id(TodoIdRequest::new(1)).await.unwrap();
    assert_eq!(unchanged.title().as_str(), "title");
    assert!(!unchanged.completed().as_bool());
}

#[tokio::test]
async fn test_each_use_case_writes_once() {
    let (service, repository) = counting_service();

    service.create(TodoRequest::new(1, "title", false)).await.unwrap();
    service.update(TodoRequest::new(1, "title", true)).await.unwrap();
    service.delete(TodoIdRequest::new(1)).await.unwrap();

    assert_eq!(repository.creates.load(Ordering::SeqCst), 1);
    assert_eq!(repository.updates.load(Ordering::SeqCst), 1);
    assert_eq!(repository.deletes.load(Ordering::SeqCst), 1);
}

/// Scenario: create(id=1) → delete(1) → find fails with NotFound
#[tokio::test]
async fn test_delete_after_create() {
    let (service, repository) = memory_service();
    seed(repository.as_ref(), 1, "title").await;

    service
        .delete(TodoIdRequest::new(1))
        .await
        .expect("delete should succeed");

    let err = service.find_by_id(TodoIdRequest::new(1)).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_delete_missing_todo_reports_not_found() {
    let (service, repository) = counting_service();

    let err = service.delete(TodoIdRequest::new(1)).await.unwrap_err();

    assert!(err.is_not_found());
    assert!(err.to_string().contains("not found"));
    assert_eq!(repository.deletes.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_find_all_returns_both_todos() {
    let (service, repository) = memory_service();
    let first = seed(repository.as_ref(), 1, "title1").await;
    let second = seed(repository.as_ref(), 2, "title2").await;

    let todos = service.find_all().await.unwrap();

    assert_eq!(todos.len(), 2);
    assert!(todos.contains(&first));
    assert!(todos.contains(&second));
}

#[tokio::test]
async fn test_find_all_empty_is_not_an_error() {
    let (service, _) = memory_service();
    assert!(service.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_find_by_id_returns_stored_todo() {
    let (service, repository) = memory_service();
    let stored = seed(repository.as_ref(), 1, "title").await;

    let found = service.find_by_id(TodoIdRequest::new(1)).await.unwrap();

    assert_eq!(found, stored);
    assert_eq!(found, todo_fixture(1, "title", false));
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let (service, _) = memory_service();
    let service = Arc::new(service);

    let creates = (0..10).map(|i| {
        let service = service.clone();
        async move {
            service
                .create(TodoRequest::unassigned(format!("todo {i}"), false))
                .await
        }
    });
    let results = futures::future::join_all(creates).await;

    let mut ids: Vec<u64> = results
        .into_iter()
        .map(|r| r.unwrap().id().as_u64())
        .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 10);
}
