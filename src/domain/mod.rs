// Copyright (c) 2025 - Cowboy AI, Inc.
//! Todo Domain Model
//!
//! Value objects with validation invariants and the [`Todo`] aggregate that
//! composes them.
//!
//! # Value Objects with Invariants
//!
//! - [`TodoId`] - 64-bit identifier, zero until storage assigns one
//! - [`Title`] - 1 to 100 characters
//! - [`Completed`] - completion flag with pure toggle operations
//! - [`Timestamp`], [`LastUpdate`], [`CreatedAt`] - instants with a canonical
//!   `YYYY-MM-DD HH:MM:SS` rendering
//!
//! # Aggregate
//!
//! - [`Todo`] - identity plus value fields; every mutation advances `last_update`
//! - [`DeletableTodo`] - identifier-only projection for deletes
//!
//! # Time
//!
//! The aggregate never reads the system clock. Callers inject a [`Clock`].

pub mod clock;
pub mod completed;
pub mod id;
pub mod invariants;
pub mod timestamp;
pub mod title;
pub mod todo;

pub use clock::{Clock, FixedClock, ManualClock, SystemClock};
pub use completed::Completed;
pub use id::TodoId;
pub use invariants::{ValidationError, ValidationResult};
pub use timestamp::{CreatedAt, LastUpdate, Timestamp, CANONICAL_FORMAT};
pub use title::Title;
pub use todo::{DeletableTodo, Todo};
