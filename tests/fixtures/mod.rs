// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for todo-service
//!
//! Provides deterministic test data for service and adapter tests.
//! All timestamps derive from a fixed constant so runs are reproducible.
//!
//! # Design Principles
//! - No `Utc::now()`: time comes from a [`ManualClock`]
//! - Each test builds its own repository; nothing is shared between tests
#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;

use todo_service::domain::{Completed, ManualClock, Title, Todo, TodoId};
use todo_service::repository::{InMemoryTodoRepository, TodoRepository};
use todo_service::service::RepositoryTodoService;

// Fixed test timestamp (2024-09-04T12:00:00Z)
pub const FIXED_TIMESTAMP: &str = "2024-09-04T12:00:00Z";

/// Parse the fixed timestamp
pub fn fixed_timestamp() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(FIXED_TIMESTAMP)
        .expect("Invalid timestamp in test fixture")
        .with_timezone(&Utc)
}

/// Clock starting at the fixed timestamp, one second later on every reading
pub fn ticking_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::ticking(fixed_timestamp(), Duration::seconds(1)))
}

/// Service over a fresh in-memory repository, returning both
pub fn memory_service() -> (RepositoryTodoService, Arc<InMemoryTodoRepository>) {
    let repository = Arc::new(InMemoryTodoRepository::new());
    let service = RepositoryTodoService::with_clock(repository.clone(), ticking_clock());
    (service, repository)
}

/// Instant seeded todos are stamped with, one hour before the fixed timestamp
///
/// Keeps seeded rows strictly older than anything the service clock produces.
pub fn seeded_timestamp() -> DateTime<Utc> {
    fixed_timestamp() - Duration::hours(1)
}

/// Todo with an explicit id, stamped at [`seeded_timestamp`]
pub fn todo_fixture(id: u64, title: &str, completed: bool) -> Todo {
    let clock = ManualClock::new(seeded_timestamp());
    Todo::create(
        TodoId::new(id),
        Title::new(title).expect("Invalid title in test fixture"),
        Completed::new(completed),
        &clock,
    )
}

/// Insert a todo directly through the repository, bypassing the service
pub async fn seed(repository: &dyn TodoRepository, id: u64, title: &str) -> Todo {
    repository
        .create(todo_fixture(id, title, false))
        .await
        .expect("Failed to seed todo")
}
