// Copyright (c) 2025 - Cowboy AI, Inc.
//! Todo Aggregate Root
//!
//! The aggregate owns its value objects and is mutated only through the
//! operations below. Each mutation replaces a field wholesale and advances
//! `last_update` to the injected clock's current time.
//!
//! # Invariants
//! - Title is always valid (enforced by [`Title`] construction)
//! - `last_update >= created_at` at all times
//! - `created_at` never changes after creation

use super::{
    invariants::validate_timestamps, Clock, Completed, CreatedAt, LastUpdate, Title, TodoId,
    ValidationError,
};

/// Todo aggregate root
///
/// The aggregate has no serialized form of its own. Adapters render it in
/// their wire shape (see `http::TodoView`), so there is exactly one JSON
/// representation with canonical timestamps.
///
/// ```compile_fail
/// fn wire_format<T: serde::Serialize>() {}
/// wire_format::<todo_service::Todo>();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id: TodoId,
    title: Title,
    completed: Completed,
    last_update: LastUpdate,
    created_at: CreatedAt,
}

impl Todo {
    /// Create a new todo
    ///
    /// Stamps `created_at` and `last_update` with a single reading of the
    /// clock. Pass [`TodoId::UNASSIGNED`] to let storage choose the id.
    pub fn create(id: TodoId, title: Title, completed: Completed, clock: &dyn Clock) -> Self {
        let now = clock.now();
        Self {
            id,
            title,
            completed,
            last_update: LastUpdate::new(now),
            created_at: CreatedAt::new(now),
        }
    }

    /// Rebuild a todo from persisted state
    ///
    /// # Invariants
    /// - `last_update` must not precede `created_at`
    pub fn restore(
        id: TodoId,
        title: Title,
        completed: Completed,
        last_update: LastUpdate,
        created_at: CreatedAt,
    ) -> Result<Self, ValidationError> {
        validate_timestamps(last_update.as_datetime(), created_at.as_datetime())?;
        Ok(Self {
            id,
            title,
            completed,
            last_update,
            created_at,
        })
    }

    /// Same todo with the identifier storage assigned on insert
    #[must_use]
    pub fn with_id(mut self, id: TodoId) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn completed(&self) -> Completed {
        self.completed
    }

    pub fn last_update(&self) -> LastUpdate {
        self.last_update
    }

    pub fn created_at(&self) -> CreatedAt {
        self.created_at
    }

    /// Replace the title
    ///
    /// The title was validated when constructed; it is not re-checked here.
    pub fn update_title(&mut self, title: Title, clock: &dyn Clock) {
        self.title = title;
        self.touch(clock);
    }

    /// Replace the completion flag
    pub fn update_completed(&mut self, completed: Completed, clock: &dyn Clock) {
        self.completed = completed;
        self.touch(clock);
    }

    /// Flip the completion flag
    pub fn toggle_completed(&mut self, clock: &dyn Clock) {
        self.update_completed(self.completed.toggle(), clock);
    }

    /// Mark as complete
    pub fn to_complete(&mut self, clock: &dyn Clock) {
        self.update_completed(self.completed.as_true(), clock);
    }

    /// Mark as incomplete
    pub fn to_incomplete(&mut self, clock: &dyn Clock) {
        self.update_completed(self.completed.as_false(), clock);
    }

    /// Advance `last_update` to the clock's current time
    ///
    /// A clock reading earlier than the current `last_update` leaves it
    /// unchanged so `last_update` never moves backwards.
    pub fn touch(&mut self, clock: &dyn Clock) {
        let now = clock.now();
        if now >= self.last_update.as_timestamp() {
            self.last_update = LastUpdate::new(now);
        }
    }

    /// Identifier-only projection used for deletion
    pub fn to_deletable(&self) -> DeletableTodo {
        DeletableTodo::new(self.id)
    }
}

/// Minimal projection of a todo that can be deleted
///
/// Carries only the identifier, so a delete does not require the rest of
/// the aggregate's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeletableTodo {
    id: TodoId,
}

impl DeletableTodo {
    pub const fn new(id: TodoId) -> Self {
        Self { id }
    }

    pub const fn id(&self) -> TodoId {
        self.id
    }
}
