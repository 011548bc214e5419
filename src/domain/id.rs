// Copyright (c) 2025 - Cowboy AI, Inc.
//! Todo Identifier Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a [`Todo`](super::Todo)
///
/// Opaque 64-bit unsigned identifier. The zero value means "not yet
/// assigned": storage replaces it with an autoincremented id on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Identifier of a todo that has not been persisted yet
    pub const UNASSIGNED: TodoId = TodoId(0);

    /// Wrap a raw identifier
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw identifier
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Whether storage has assigned this identifier
    pub const fn is_assigned(&self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TodoId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<TodoId> for u64 {
    fn from(value: TodoId) -> Self {
        value.0
    }
}
