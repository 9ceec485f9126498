//! # Validation Module
//!
//! Input checks shared by the event operations, and the messages they fail
//! with.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Checks Happen                                │
//! │                                                                         │
//! │  Caller (host application)                                             │
//! │  └── may or may not have validated anything                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Operation (budget / participants / schedule)                          │
//! │  └── THIS MODULE: reject bad input before computing anything           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Result: value, or EventError::InvalidArgument(message)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The messages are part of the public contract: callers compare against
//! these constants rather than against string literals.

use crate::error::{EventError, EventResult};

// =============================================================================
// Messages
// =============================================================================

/// Cost per participant was zero, negative, infinite or not a number.
pub const COST_REQUIRED: &str = "There should be a cost per participant";

/// Participant list was absent.
pub const PARTICIPANT_LIST_REQUIRED: &str = "A valid list of participants is expected";

/// Participant confirmation map was absent.
pub const PARTICIPANT_MAP_REQUIRED: &str = "A valid map of participants is expected";

/// Dates didn't parse, or start was not before end.
pub const DATE_RANGE_REQUIRED: &str = "A start date and end date is expected";

/// Capacity was negative.
pub const CAPACITY_NOT_NEGATIVE: &str = "Maximum participants cannot be negative";

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a cost per participant.
///
/// ## Rules
/// - Must be strictly positive
/// - Must be finite (NaN and infinity are rejected)
///
/// ## Example
/// ```rust
/// use event_core::validation::require_positive_cost;
///
/// assert_eq!(require_positive_cost(100.0).unwrap(), 100.0);
/// assert!(require_positive_cost(0.0).is_err());
/// assert!(require_positive_cost(-50.0).is_err());
/// assert!(require_positive_cost(f64::INFINITY).is_err());
/// ```
pub fn require_positive_cost(cost: f64) -> EventResult<f64> {
    if cost.is_finite() && cost > 0.0 {
        Ok(cost)
    } else {
        Err(EventError::invalid_argument(COST_REQUIRED))
    }
}

/// Validates a capacity and returns it as an unsigned count.
///
/// ## Rules
/// - Zero is allowed (an event nobody can join is always full)
/// - Negative values are rejected
pub fn require_capacity(max_participants: i64) -> EventResult<u64> {
    u64::try_from(max_participants)
        .map_err(|_| EventError::invalid_argument(CAPACITY_NOT_NEGATIVE))
}

// =============================================================================
// String Validators
// =============================================================================

/// Checks that `value` is shaped exactly like `YYYY-MM-DD`.
///
/// ## Rules
/// - Exactly 10 bytes
/// - ASCII digits at positions 0-3, 5-6 and 8-9
/// - `-` at positions 4 and 7
///
/// Only the shape is checked; whether the day exists is up to the parser.
///
/// ## Example
/// ```rust
/// use event_core::validation::is_calendar_date_shape;
///
/// assert!(is_calendar_date_shape("2024-11-01"));
/// assert!(is_calendar_date_shape("2024-02-30"));
/// assert!(!is_calendar_date_shape("2024-1-5"));
/// assert!(!is_calendar_date_shape(" 2024-11-01"));
/// ```
pub fn is_calendar_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

// =============================================================================
// Presence Validators
// =============================================================================

/// Unwraps an optional input, failing with `message` when it is absent.
///
/// ## Example
/// ```rust
/// use event_core::validation::{require_present, PARTICIPANT_LIST_REQUIRED};
///
/// let names = vec!["Alice".to_string()];
/// assert!(require_present(Some(&names), PARTICIPANT_LIST_REQUIRED).is_ok());
///
/// let missing: Option<&Vec<String>> = None;
/// let err = require_present(missing, PARTICIPANT_LIST_REQUIRED).unwrap_err();
/// assert_eq!(err.message(), PARTICIPANT_LIST_REQUIRED);
/// ```
pub fn require_present<'a, T: ?Sized>(value: Option<&'a T>, message: &str) -> EventResult<&'a T> {
    value.ok_or_else(|| EventError::invalid_argument(message))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive_cost() {
        assert!(require_positive_cost(0.01).is_ok());
        assert!(require_positive_cost(100.0).is_ok());

        assert!(require_positive_cost(0.0).is_err());
        assert!(require_positive_cost(-0.0).is_err());
        assert!(require_positive_cost(-50.0).is_err());
        assert!(require_positive_cost(f64::NAN).is_err());
        assert!(require_positive_cost(f64::INFINITY).is_err());
        assert!(require_positive_cost(f64::NEG_INFINITY).is_err());
        assert!(require_positive_cost(f64::MAX).is_ok());
    }

    #[test]
    fn test_is_calendar_date_shape() {
        assert!(is_calendar_date_shape("2024-11-01"));
        assert!(is_calendar_date_shape("0024-11-01"));

        assert!(!is_calendar_date_shape(""));
        assert!(!is_calendar_date_shape("24-11-01"));
        assert!(!is_calendar_date_shape("2024-11-1"));
        assert!(!is_calendar_date_shape("+2024-11-01"));
        assert!(!is_calendar_date_shape("2024-11-01 "));
        assert!(!is_calendar_date_shape("2024/11/01"));
        assert!(!is_calendar_date_shape("20241-1-01"));
    }

    #[test]
    fn test_require_capacity() {
        assert_eq!(require_capacity(0).unwrap(), 0);
        assert_eq!(require_capacity(4).unwrap(), 4);

        let err = require_capacity(-1).unwrap_err();
        assert_eq!(err.message(), CAPACITY_NOT_NEGATIVE);
    }

    #[test]
    fn test_require_present_on_slices() {
        let names = ["Alice", "Bob"];
        let present: Option<&[&str]> = Some(&names[..]);
        assert_eq!(require_present(present, PARTICIPANT_LIST_REQUIRED).unwrap().len(), 2);

        let absent: Option<&[&str]> = None;
        assert_eq!(
            require_present(absent, PARTICIPANT_LIST_REQUIRED),
            Err(EventError::InvalidArgument(PARTICIPANT_LIST_REQUIRED.to_string()))
        );
    }
}
