// Copyright (c) 2025 - Cowboy AI, Inc.
//! Clock Capability
//!
//! Domain logic never calls `Utc::now()` directly. The current time is
//! read from an injected [`Clock`], so timestamp-dependent behavior is
//! deterministic under test.
//!
//! - [`SystemClock`] - wall clock, used in production
//! - [`FixedClock`] - always returns the same instant
//! - [`ManualClock`] - moves only when told to, or by a fixed step per read

use chrono::{DateTime, Duration, Utc};
use std::sync::Mutex;

use super::Timestamp;

/// Source of the current time
pub trait Clock: Send + Sync {
    /// Current instant
    fn now(&self) -> Timestamp;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::new(Utc::now())
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(Timestamp);

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(Timestamp::new(instant))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

/// Clock driven by the caller
///
/// With a non-zero step, every call to [`Clock::now`] returns the current
/// instant and then moves the clock forward by the step, so successive
/// readings strictly increase.
#[derive(Debug)]
pub struct ManualClock {
    current: Mutex<DateTime<Utc>>,
    step: Duration,
}

impl ManualClock {
    /// Create a clock that only moves via [`advance`](Self::advance) or [`set`](Self::set)
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            current: Mutex::new(start),
            step: Duration::zero(),
        }
    }

    /// Create a clock that advances by `step` after every reading
    pub fn ticking(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            current: Mutex::new(start),
            step,
        }
    }

    /// Move the clock forward
    pub fn advance(&self, by: Duration) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current += by;
    }

    /// Jump to an instant
    pub fn set(&self, instant: DateTime<Utc>) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current = instant;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        let now = *current;
        *current += self.step;
        Timestamp::new(now)
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}
