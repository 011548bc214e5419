// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Todo Value Objects
//!
//! Verifies the title length bounds, completion toggling and timestamp
//! ordering over arbitrary inputs.

use chrono::{DateTime, Duration, Utc};
use proptest::prelude::*;

use todo_service::domain::{Completed, ManualClock, Title, Todo, TodoId};

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Titles within the accepted character range, including multi-byte text
fn valid_title() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 1..=100).prop_map(|chars| chars.into_iter().collect())
}

/// Titles longer than the accepted range
fn long_title() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 101..300).prop_map(|chars| chars.into_iter().collect())
}

/// Sequence of aggregate operations
#[derive(Debug, Clone)]
enum Step {
    Rename(String),
    SetCompleted(bool),
    Toggle,
    Touch,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        valid_title().prop_map(Step::Rename),
        any::<bool>().prop_map(Step::SetCompleted),
        Just(Step::Toggle),
        Just(Step::Touch),
    ]
}

fn start() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-09-04T12:00:00Z")
        .expect("Invalid timestamp in test fixture")
        .with_timezone(&Utc)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Every title of 1 to 100 characters is accepted unchanged
    #[test]
    fn prop_valid_titles_accepted(text in valid_title()) {
        let title = Title::new(text.clone());
        prop_assert!(title.is_ok());
        let title = title.unwrap();
        prop_assert_eq!(title.as_str(), text.as_str());
    }

    /// Property: Every title over 100 characters is rejected as too long
    #[test]
    fn prop_long_titles_rejected(text in long_title()) {
        let err = Title::new(text).unwrap_err();
        prop_assert!(err.is_length_violation());
        prop_assert!(err.to_string().contains("too long"));
    }

    /// Property: Toggling twice is the identity
    #[test]
    fn prop_double_toggle_is_identity(value in any::<bool>()) {
        let completed = Completed::new(value);
        prop_assert_eq!(completed.toggle().toggle(), completed);
        prop_assert_ne!(completed.toggle(), completed);
    }

    /// Property: as_true and as_false ignore the current value
    #[test]
    fn prop_explicit_completion_is_absolute(value in any::<bool>()) {
        prop_assert!(Completed::new(value).as_true().as_bool());
        prop_assert!(!Completed::new(value).as_false().as_bool());
    }

    /// Property: Mutations never move last_update before created_at
    ///
    /// The clock ticks forward by a random step, possibly zero.
    #[test]
    fn prop_last_update_never_precedes_creation(
        steps in prop::collection::vec(step(), 0..30),
        step_ms in 0i64..5_000,
    ) {
        let clock = ManualClock::ticking(start(), Duration::milliseconds(step_ms));
        let mut todo = Todo::create(
            TodoId::new(1),
            Title::new("property").unwrap(),
            Completed::default(),
            &clock,
        );
        let created_at = todo.created_at();
        let mut previous = todo.last_update();

        for step in steps {
            match step {
                Step::Rename(text) => todo.update_title(Title::new(text).unwrap(), &clock),
                Step::SetCompleted(value) => todo.update_completed(Completed::new(value), &clock),
                Step::Toggle => todo.toggle_completed(&clock),
                Step::Touch => todo.touch(&clock),
            }

            prop_assert_eq!(todo.created_at(), created_at);
            prop_assert!(todo.last_update().as_datetime() >= created_at.as_datetime());
            prop_assert!(todo.last_update() >= previous);
            previous = todo.last_update();
        }
    }
}
