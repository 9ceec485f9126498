//! # Participants Module
//!
//! Operations over the participant list and the confirmation map.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ["Alice", "Bob", "Charlie"] ──► filter_participants_by_name("A")       │
//! │                                   └──► ["Alice"]                        │
//! │                                                                         │
//! │  {Alice: true, Bob: false, Charlie: true}                               │
//! │      ├──► build_confirmed_participants_report ──► ["Alice", "Charlie"]  │
//! │      └──► is_event_full(max = 4) ──► false  (3 registered < 4)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Absent inputs are `None` and fail with `InvalidArgument`.

use tracing::{debug, warn};

use crate::error::EventResult;
use crate::types::ConfirmationMap;
use crate::validation::{
    require_capacity, require_present, PARTICIPANT_LIST_REQUIRED, PARTICIPANT_MAP_REQUIRED,
};

/// Returns the participants whose name contains `search_text`.
///
/// ## Rules
/// - `None` list fails with [`PARTICIPANT_LIST_REQUIRED`]
/// - Empty `search_text` matches nobody
/// - Matching is a case-sensitive substring test, input order is kept
///
/// ## Example
/// ```rust
/// use event_core::filter_participants_by_name;
///
/// let names = ["Alice", "Bob", "Charlie"];
/// let found = filter_participants_by_name(Some(&names[..]), "A").unwrap();
/// assert_eq!(found, vec!["Alice".to_string()]);
///
/// assert!(filter_participants_by_name(Some(&names[..]), "").unwrap().is_empty());
/// assert!(filter_participants_by_name::<&str>(None, "A").is_err());
/// ```
pub fn filter_participants_by_name<S: AsRef<str>>(
    participants: Option<&[S]>,
    search_text: &str,
) -> EventResult<Vec<String>> {
    let participants = require_present(participants, PARTICIPANT_LIST_REQUIRED).inspect_err(|_| {
        warn!("Rejected participant search: no participant list");
    })?;

    if search_text.is_empty() {
        debug!(total = participants.len(), "Empty search text, no matches");
        return Ok(Vec::new());
    }

    let matches: Vec<String> = participants
        .iter()
        .map(|name| name.as_ref())
        .filter(|name| name.contains(search_text))
        .map(str::to_string)
        .collect();

    debug!(
        search_text,
        total = participants.len(),
        matched = matches.len(),
        "Filtered participants by name"
    );
    Ok(matches)
}

/// Lists every confirmed participant, each once, sorted by name.
///
/// ## Example
/// ```rust
/// use event_core::{build_confirmed_participants_report, ConfirmationMap};
///
/// let mut participants = ConfirmationMap::new();
/// participants.insert("Charlie".to_string(), true);
/// participants.insert("Bob".to_string(), false);
/// participants.insert("Alice".to_string(), true);
///
/// let report = build_confirmed_participants_report(Some(&participants)).unwrap();
/// assert_eq!(report, vec!["Alice".to_string(), "Charlie".to_string()]);
/// ```
pub fn build_confirmed_participants_report(
    participants: Option<&ConfirmationMap>,
) -> EventResult<Vec<String>> {
    let participants = require_present(participants, PARTICIPANT_MAP_REQUIRED).inspect_err(|_| {
        warn!("Rejected participant report: no participant map");
    })?;

    let mut confirmed: Vec<String> = participants
        .iter()
        .filter(|&(_, &is_confirmed)| is_confirmed)
        .map(|(name, _)| name.clone())
        .collect();
    confirmed.sort_unstable();

    debug!(
        total = participants.len(),
        confirmed = confirmed.len(),
        "Built confirmed participants report"
    );
    Ok(confirmed)
}

/// Returns true when the number of registered participants (confirmed or
/// not) has reached `max_participants`.
///
/// ## Rules
/// - `None` map fails with [`PARTICIPANT_MAP_REQUIRED`]
/// - Negative `max_participants` fails with
///   [`CAPACITY_NOT_NEGATIVE`](crate::validation::CAPACITY_NOT_NEGATIVE)
/// - A capacity of zero is always full
///
/// ## Example
/// ```rust
/// use event_core::{is_event_full, ConfirmationMap};
///
/// let participants: ConfirmationMap = [("Alice", true), ("Bob", false), ("Charlie", true)]
///     .into_iter()
///     .map(|(name, confirmed)| (name.to_string(), confirmed))
///     .collect();
///
/// assert!(!is_event_full(Some(&participants), 4).unwrap());
/// assert!(is_event_full(Some(&participants), 3).unwrap());
/// ```
pub fn is_event_full(
    participants: Option<&ConfirmationMap>,
    max_participants: i64,
) -> EventResult<bool> {
    let participants = require_present(participants, PARTICIPANT_MAP_REQUIRED).inspect_err(|_| {
        warn!("Rejected capacity check: no participant map");
    })?;
    let capacity = require_capacity(max_participants).inspect_err(|_| {
        warn!(max_participants, "Rejected capacity check: negative capacity");
    })?;

    let registered = participants.len() as u64;
    let full = registered >= capacity;
    debug!(registered, capacity, full, "Checked event capacity");
    Ok(full)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EventError;
    use crate::test_support::init_tracing;
    use crate::validation::CAPACITY_NOT_NEGATIVE;

    fn participant_list() -> Vec<String> {
        vec!["Alice".to_string(), "Bob".to_string(), "Charlie".to_string()]
    }

    fn participant_map() -> ConfirmationMap {
        let mut map = ConfirmationMap::new();
        map.insert("Alice".to_string(), true);
        map.insert("Bob".to_string(), false);
        map.insert("Charlie".to_string(), true);
        map
    }

    // -------------------------------------------------------------------------
    // filter_participants_by_name
    // -------------------------------------------------------------------------

    #[test]
    fn test_valid_search_text() {
        init_tracing();
        let list = participant_list();
        let result = filter_participants_by_name(Some(&list[..]), "A").unwrap();
        assert!(result.contains(&"Alice".to_string()));
        assert_eq!(result, vec!["Alice".to_string()]);
    }

    #[test]
    fn test_search_is_case_sensitive_substring() {
        let list = participant_list();
        assert_eq!(
            filter_participants_by_name(Some(&list[..]), "li").unwrap(),
            vec!["Alice".to_string(), "Charlie".to_string()]
        );
        assert!(filter_participants_by_name(Some(&list[..]), "alice").unwrap().is_empty());
        assert!(filter_participants_by_name(Some(&list[..]), "Zed").unwrap().is_empty());
    }

    #[test]
    fn test_search_keeps_input_order_and_duplicates() {
        let list = ["Charlie", "Alice", "Charlie"];
        assert_eq!(
            filter_participants_by_name(Some(&list[..]), "e").unwrap(),
            vec!["Charlie".to_string(), "Alice".to_string(), "Charlie".to_string()]
        );
    }

    #[test]
    fn test_empty_search_text() {
        init_tracing();
        let list = participant_list();
        assert!(filter_participants_by_name(Some(&list[..]), "").unwrap().is_empty());
    }

    #[test]
    fn test_empty_list() {
        let list: Vec<String> = Vec::new();
        assert!(filter_participants_by_name(Some(&list[..]), "A").unwrap().is_empty());
    }

    #[test]
    fn test_null_participants_list() {
        init_tracing();
        let err = filter_participants_by_name::<String>(None, "A").unwrap_err();
        assert_eq!(err.to_string(), "A valid list of participants is expected");
    }

    // -------------------------------------------------------------------------
    // build_confirmed_participants_report
    // -------------------------------------------------------------------------

    #[test]
    fn test_report_valid_participants() {
        init_tracing();
        let map = participant_map();
        let result = build_confirmed_participants_report(Some(&map)).unwrap();
        assert!(result.contains(&"Alice".to_string()));
        assert!(result.contains(&"Charlie".to_string()));
        assert!(!result.contains(&"Bob".to_string()));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_report_empty_and_all_unconfirmed() {
        assert!(build_confirmed_participants_report(Some(&ConfirmationMap::new()))
            .unwrap()
            .is_empty());

        let mut map = ConfirmationMap::new();
        map.insert("Bob".to_string(), false);
        map.insert("Dana".to_string(), false);
        assert!(build_confirmed_participants_report(Some(&map)).unwrap().is_empty());
    }

    #[test]
    fn test_report_is_stable_across_map_instances() {
        let first = build_confirmed_participants_report(Some(&participant_map())).unwrap();
        let second = build_confirmed_participants_report(Some(&participant_map())).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, vec!["Alice".to_string(), "Charlie".to_string()]);
    }

    #[test]
    fn test_report_null_map() {
        let err = build_confirmed_participants_report(None).unwrap_err();
        assert_eq!(err, EventError::InvalidArgument(PARTICIPANT_MAP_REQUIRED.to_string()));
    }

    // -------------------------------------------------------------------------
    // is_event_full
    // -------------------------------------------------------------------------

    #[test]
    fn test_event_not_full() {
        init_tracing();
        assert!(!is_event_full(Some(&participant_map()), 4).unwrap());
    }

    #[test]
    fn test_event_full_counts_unconfirmed_entries() {
        let map = participant_map();
        assert!(is_event_full(Some(&map), 3).unwrap());
        assert!(is_event_full(Some(&map), 2).unwrap());
    }

    #[test]
    fn test_zero_capacity_is_always_full() {
        assert!(is_event_full(Some(&ConfirmationMap::new()), 0).unwrap());
        assert!(!is_event_full(Some(&ConfirmationMap::new()), 1).unwrap());
    }

    #[test]
    fn test_negative_capacity() {
        let err = is_event_full(Some(&participant_map()), -1).unwrap_err();
        assert_eq!(err.message(), CAPACITY_NOT_NEGATIVE);
    }

    #[test]
    fn test_capacity_null_map() {
        let err = is_event_full(None, 4).unwrap_err();
        assert_eq!(err.message(), PARTICIPANT_MAP_REQUIRED);
    }
}
