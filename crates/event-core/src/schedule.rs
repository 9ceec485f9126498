//! # Schedule Module
//!
//! Parsing event dates and checking that a start/end pair is usable.
//!
//! ## Flow
//! ```text
//! "2024-11-01", "2024-11-10"
//!      │
//!      ▼
//! parse_event_date (both) ── fails? ──► InvalidArgument
//!      │
//!      ▼
//! start < end ? ── no ──► InvalidArgument
//!      │
//!      ▼
//! EventDateRange { start, end }  /  Ok(true)
//! ```
//!
//! Bad format and bad ordering fail with the same message
//! ([`DATE_RANGE_REQUIRED`]).

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::{EventError, EventResult};
use crate::types::EventDateRange;
use crate::validation::{is_calendar_date_shape, DATE_RANGE_REQUIRED};
use crate::EVENT_DATE_FORMAT;

/// Parses a `YYYY-MM-DD` date.
///
/// ## Rules
/// - Exactly ten characters: four-digit year, two-digit month and day
/// - No surrounding whitespace, no sign, no short fields
/// - Must name a real calendar day
///
/// ## Example
/// ```rust
/// use event_core::parse_event_date;
///
/// let date = parse_event_date("2024-11-01").unwrap();
/// assert_eq!(date.to_string(), "2024-11-01");
/// assert!(parse_event_date("2024-13-01").is_err());
/// assert!(parse_event_date("2024-1-5").is_err());
/// ```
pub fn parse_event_date(value: &str) -> EventResult<NaiveDate> {
    if !is_calendar_date_shape(value) {
        warn!(value, "Rejected event date: not YYYY-MM-DD");
        return Err(EventError::invalid_argument(DATE_RANGE_REQUIRED));
    }

    NaiveDate::parse_from_str(value, EVENT_DATE_FORMAT).map_err(|e| {
        warn!(value, error = %e, "Rejected event date");
        EventError::invalid_argument(DATE_RANGE_REQUIRED)
    })
}

impl EventDateRange {
    /// Parses a `YYYY-MM-DD` pair. Start must be strictly before end.
    ///
    /// ## Example
    /// ```rust
    /// use event_core::EventDateRange;
    ///
    /// let range = EventDateRange::parse("2024-11-01", "2024-11-10").unwrap();
    /// assert_eq!(range.days(), 9);
    ///
    /// assert!(EventDateRange::parse("2024-11-01", "2024-11-01").is_err());
    /// ```
    pub fn parse(start_date: &str, end_date: &str) -> EventResult<Self> {
        let start = parse_event_date(start_date)?;
        let end = parse_event_date(end_date)?;

        if start >= end {
            warn!(%start, %end, "Rejected event date range: start is not before end");
            return Err(EventError::invalid_argument(DATE_RANGE_REQUIRED));
        }

        debug!(%start, %end, "Validated event date range");
        Ok(EventDateRange { start, end })
    }
}

/// Validates that an event's `YYYY-MM-DD` dates parse and that start comes
/// strictly before end.
///
/// Returns `Ok(true)` on success; every problem is an error, there is no
/// `Ok(false)`.
///
/// ## Example
/// ```rust
/// use event_core::validate_event_date_range;
/// use event_core::validation::DATE_RANGE_REQUIRED;
///
/// assert!(validate_event_date_range("2024-11-01", "2024-11-10").unwrap());
///
/// let err = validate_event_date_range("2024-11-10", "2024-11-01").unwrap_err();
/// assert_eq!(err.message(), DATE_RANGE_REQUIRED);
/// ```
pub fn validate_event_date_range(start_date: &str, end_date: &str) -> EventResult<bool> {
    EventDateRange::parse(start_date, end_date).map(|_| true)
}

// =============================================================================
// Unit Tests
// =============================================================================
