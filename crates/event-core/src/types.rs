//! # Domain Types
//!
//! Types shared by the event operations.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐   ┌─────────────────┐                         │
//! │  │  ConfirmationMap    │   │ EventDateRange  │                         │
//! │  │  ─────────────────  │   │  ─────────────  │                         │
//! │  │  name → confirmed   │   │  start (date)   │                         │
//! │  │  "Alice" → true     │   │  end   (date)   │                         │
//! │  └─────────────────────┘   └─────────────────┘                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Participants
// =============================================================================

/// Participant name → whether they confirmed attendance.
///
/// Names are unique keys. Iteration order carries no meaning.
pub type ConfirmationMap = HashMap<String, bool>;

// =============================================================================
// Dates
// =============================================================================

/// An event period. When built by [`EventDateRange::parse`] (see
/// [`crate::schedule`]), `start` is strictly before `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventDateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl EventDateRange {
    /// Whole days from start to end.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// True if `date` falls inside the range, both ends included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
