// Copyright (c) 2025 - Cowboy AI, Inc.
//! Title Value Object with Length Invariants

use serde::{Deserialize, Serialize};
use std::fmt;

use super::invariants::{validate_length, ValidationError};

/// Title of a todo
///
/// Invariants:
/// - At least 1 character
/// - At most 100 characters
///
/// Length is counted in Unicode scalar values, so `"日本語"` has length 3.
/// A title is never mutated; updates replace it wholesale.
///
/// # Examples
///
/// ```rust
/// use todo_service::domain::Title;
///
/// let title = Title::new("buy milk").unwrap();
/// assert_eq!(title.as_str(), "buy milk");
///
/// assert!(Title::new("").is_err());
/// assert!(Title::new("a".repeat(101)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Title(String);

impl Title {
    /// Minimum number of characters
    pub const MIN_LENGTH: usize = 1;

    /// Maximum number of characters
    pub const MAX_LENGTH: usize = 100;

    /// Create a new title with validation
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        validate_length(&text, Self::MIN_LENGTH, Self::MAX_LENGTH)?;
        Ok(Self(text))
    }

    /// Get the title as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the title
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Always false: a valid title is never empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Title {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Title {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Title> for String {
    fn from(value: Title) -> Self {
        value.0
    }
}
