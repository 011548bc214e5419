// Copyright (c) 2025 - Cowboy AI, Inc.
//! Timestamp Value Objects
//!
//! [`Timestamp`] wraps an instant and knows its canonical rendering
//! (`YYYY-MM-DD HH:MM:SS`, UTC). [`LastUpdate`] and [`CreatedAt`] are
//! distinct wrappers so the two aggregate timestamps cannot be swapped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical rendering format used on the wire
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Wrap an instant
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Render as `YYYY-MM-DD HH:MM:SS`
    pub fn to_canonical_string(&self) -> String {
        self.0.format(CANONICAL_FORMAT).to_string()
    }

    /// Get the raw instant
    pub const fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(CANONICAL_FORMAT))
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

/// Time of the most recent mutation of a todo
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LastUpdate(Timestamp);

impl LastUpdate {
    pub const fn new(timestamp: Timestamp) -> Self {
        Self(timestamp)
    }

    pub const fn as_timestamp(&self) -> Timestamp {
        self.0
    }

    pub const fn as_datetime(&self) -> DateTime<Utc> {
        self.0.as_datetime()
    }

    pub fn to_canonical_string(&self) -> String {
        self.0.to_canonical_string()
    }
}

impl fmt::Display for LastUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Time a todo was created; fixed for the aggregate's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreatedAt(Timestamp);

impl CreatedAt {
    pub const fn new(timestamp: Timestamp) -> Self {
        Self(timestamp)
    }

    pub const fn as_timestamp(&self) -> Timestamp {
        self.0
    }

    pub const fn as_datetime(&self) -> DateTime<Utc> {
        self.0.as_datetime()
    }

    pub fn to_canonical_string(&self) -> String {
        self.0.to_canonical_string()
    }
}

impl fmt::Display for CreatedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
