//! # event-core: Pure Event Logic
//!
//! Stateless rules for planning an event: how much it costs, who is on the
//! list, whether the dates make sense and whether there is still room.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Event Utilities Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Host Application                             │   │
//! │  │    (web handler, desktop app, batch job, ...)                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain function calls                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ event-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌──────────────┐  ┌───────────┐  ┌─────────┐  │   │
//! │  │   │  budget   │  │ participants │  │ schedule  │  │ config  │  │   │
//! │  │   │  cost ×   │  │ search       │  │ date      │  │ rules   │  │   │
//! │  │   │  count    │  │ report, cap  │  │ ranges    │  │ (TOML)  │  │   │
//! │  │   └───────────┘  └──────────────┘  └───────────┘  └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO DATABASE • NO NETWORK • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`budget`] - Event budget calculation
//! - [`participants`] - Name search, confirmed report, capacity check
//! - [`schedule`] - Date parsing and date range validation
//! - [`validation`] - Shared input checks and their messages
//! - [`types`] - Domain types (confirmation map, date range)
//! - [`error`] - Error types
//! - [`config`] - Optional TOML configuration and the [`EventRules`] façade
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, no hidden state
//! 2. **One Error Kind**: every rejected input is an [`EventError::InvalidArgument`]
//! 3. **No Partial Results**: an operation either fully succeeds or fails first
//!
//! ## Example Usage
//!
//! ```rust
//! use event_core::{compute_event_budget, validate_event_date_range};
//!
//! let budget = compute_event_budget(3, 100.0).unwrap();
//! assert_eq!(budget, 300.0);
//!
//! assert!(validate_event_date_range("2024-11-01", "2024-11-10").unwrap());
//! assert!(validate_event_date_range("2024-11-10", "2024-11-01").is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod budget;
pub mod config;
pub mod error;
pub mod participants;
pub mod schedule;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use event_core::is_event_full` instead of
// `use event_core::participants::is_event_full`

pub use budget::compute_event_budget;
pub use config::{EventConfig, EventRules};
pub use error::{ConfigError, EventError, EventResult};
pub use participants::{
    build_confirmed_participants_report, filter_participants_by_name, is_event_full,
};
pub use schedule::{parse_event_date, validate_event_date_range};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Calendar format accepted for event dates (`YYYY-MM-DD`), as a chrono
/// format string.
pub const EVENT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Capacity used by [`EventRules`] when no config overrides it.
pub const DEFAULT_MAX_PARTICIPANTS: u32 = 100;

#[cfg(test)]
pub(crate) mod test_support {
    /// Installs a test-writer subscriber so `debug!`/`warn!` output shows up
    /// under `cargo test -- --nocapture`. Safe to call from every test.
    pub fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("event_core=debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
