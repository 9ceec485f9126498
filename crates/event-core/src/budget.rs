//! # Budget Module
//!
//! Projected cost of an event: participant count times cost per participant.

use tracing::{debug, warn};

use crate::error::EventResult;
use crate::validation::require_positive_cost;

/// Computes the total budget for an event.
///
/// ## Rules
/// - `cost_per_participant <= 0`, NaN or infinite fails with
///   [`COST_REQUIRED`](crate::validation::COST_REQUIRED), whatever the count
/// - `participant_count <= 0` is a zero budget, not an error
/// - Otherwise `participant_count * cost_per_participant`, unrounded
///
/// ## Example
/// ```rust
/// use event_core::compute_event_budget;
///
/// assert_eq!(compute_event_budget(3, 100.0).unwrap(), 300.0);
/// assert_eq!(compute_event_budget(0, 100.0).unwrap(), 0.0);
/// assert_eq!(compute_event_budget(-1, 100.0).unwrap(), 0.0);
/// assert!(compute_event_budget(3, -50.0).is_err());
/// ```
pub fn compute_event_budget(participant_count: i64, cost_per_participant: f64) -> EventResult<f64> {
    let cost = require_positive_cost(cost_per_participant).inspect_err(|_| {
        warn!(cost_per_participant, "Rejected event budget: cost is not a positive finite number");
    })?;

    if participant_count <= 0 {
        debug!(participant_count, "No participants, budget is zero");
        return Ok(0.0);
    }

    let budget = participant_count as f64 * cost;
    debug!(participant_count, cost, budget, "Computed event budget");
    Ok(budget)
}

// =============================================================================
// Unit Tests
// =============================================================================
