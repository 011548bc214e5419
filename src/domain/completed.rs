// Copyright (c) 2025 - Cowboy AI, Inc.
//! Completed Flag Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Completion state of a todo
///
/// Binary sub-state (Incomplete ⇄ Complete) with no forbidden transitions.
/// Every operation returns a new value; the receiver is never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Completed(bool);

impl Completed {
    /// Wrap a boolean
    pub const fn new(value: bool) -> Self {
        Self(value)
    }

    /// Flip the flag
    #[must_use]
    pub const fn toggle(self) -> Self {
        Self(!self.0)
    }

    /// Force to complete
    #[must_use]
    pub const fn as_true(self) -> Self {
        Self(true)
    }

    /// Force to incomplete
    #[must_use]
    pub const fn as_false(self) -> Self {
        Self(false)
    }

    /// Get the raw flag
    pub const fn as_bool(&self) -> bool {
        self.0
    }
}

impl fmt::Display for Completed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 {
            write!(f, "complete")
        } else {
            write!(f, "incomplete")
        }
    }
}

impl From<bool> for Completed {
    fn from(value: bool) -> Self {
        Self(value)
    }
}
