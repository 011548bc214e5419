// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Validation Functions - Domain Invariants
//!
//! All business rule validation for the Todo aggregate lives here. Every
//! function is pure (no I/O, no clock) and returns a [`ValidationResult`].
//!
//! # Invariant Categories
//!
//! 1. **Structural Invariants**: title length bounds
//! 2. **State Invariants**: `last_update` never precedes `created_at`

use chrono::{DateTime, Utc};

/// Validation result with detailed error information
pub type ValidationResult = Result<(), ValidationError>;

/// Domain validation failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Title has fewer characters than the minimum
    #[error("title is too short: {length} characters (minimum {min})")]
    TooShort { length: usize, min: usize },

    /// Title has more characters than the maximum
    #[error("title is too long: {length} characters (maximum {max})")]
    TooLong { length: usize, max: usize },

    /// Stored timestamps would put the last update before creation
    #[error("last update {last_update} is before creation time {created_at}")]
    LastUpdateBeforeCreation {
        last_update: DateTime<Utc>,
        created_at: DateTime<Utc>,
    },
}

impl ValidationError {
    /// Whether the failure is a title length violation
    pub fn is_length_violation(&self) -> bool {
        matches!(self, Self::TooShort { .. } | Self::TooLong { .. })
    }
}

/// Validate a character count against inclusive bounds
///
/// Lengths are counted in Unicode scalar values, not bytes.
pub fn validate_length(text: &str, min: usize, max: usize) -> ValidationResult {
    let length = text.chars().count();

    if length < min {
        return Err(ValidationError::TooShort { length, min });
    }

    if length > max {
        return Err(ValidationError::TooLong { length, max });
    }

    Ok(())
}

/// Validate that the last update does not precede creation
pub fn validate_timestamps(
    last_update: DateTime<Utc>,
    created_at: DateTime<Utc>,
) -> ValidationResult {
    if last_update < created_at {
        return Err(ValidationError::LastUpdateBeforeCreation {
            last_update,
            created_at,
        });
    }
    Ok(())
}
