//! # Event Configuration
//!
//! Optional configuration for hosts that want to tune the default capacity
//! without recompiling, and the [`EventRules`] façade that applies it.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. TOML Config File (highest priority)                                │
//! │     ~/.config/event-core/events.toml (Linux)                           │
//! │     ~/Library/Application Support/com.events.event-core/events.toml    │
//! │                                                                         │
//! │  2. Default Values (lowest priority)                                   │
//! │     100 participants                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # events.toml
//! [capacity]
//! max_participants = 100
//! ```
//!
//! Dates are not configurable: every date check uses `YYYY-MM-DD` with start
//! strictly before end. The free functions in [`crate::budget`],
//! [`crate::participants`] and [`crate::schedule`] never read this config.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::budget::compute_event_budget;
use crate::error::{ConfigError, ConfigResult, EventResult};
use crate::participants::{
    build_confirmed_participants_report, filter_participants_by_name, is_event_full,
};
use crate::schedule::validate_event_date_range;
use crate::types::{ConfirmationMap, EventDateRange};
use crate::DEFAULT_MAX_PARTICIPANTS;

// =============================================================================
// Capacity Settings
// =============================================================================

/// Capacity limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CapacitySettings {
    /// Maximum registered participants before an event counts as full.
    #[serde(default = "default_max_participants")]
    pub max_participants: u32,
}

fn default_max_participants() -> u32 {
    DEFAULT_MAX_PARTICIPANTS
}

impl Default for CapacitySettings {
    fn default() -> Self {
        CapacitySettings {
            max_participants: default_max_participants(),
        }
    }
}

// =============================================================================
// Main Event Configuration
// =============================================================================

/// Complete event configuration. Unknown sections and keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventConfig {
    /// Capacity limits.
    #[serde(default)]
    pub capacity: CapacitySettings,
}

impl EventConfig {
    /// Loads configuration from file, falling back to defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (events.toml), skipped if it doesn't exist
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading event config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load event config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML document. Missing sections and keys take defaults.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ConfigResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ConfigError::InvalidConfig("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Event config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.capacity.max_participants == 0 {
            return Err(ConfigError::InvalidConfig(
                "capacity.max_participants must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "events", "event-core")
            .map(|dirs| dirs.config_dir().join("events.toml"))
    }
}

// =============================================================================
// Rules Façade
// =============================================================================

/// The event operations bound to an [`EventConfig`].
///
/// Capacity checks use the configured maximum. Every other operation,
/// including the date checks, behaves exactly like its free function.
///
/// ## Example
/// ```rust
/// use event_core::{ConfirmationMap, EventConfig, EventRules};
///
/// let config = EventConfig::from_toml_str("[capacity]\nmax_participants = 2\n").unwrap();
/// let rules = EventRules::new(config);
///
/// let mut participants = ConfirmationMap::new();
/// participants.insert("Alice".to_string(), true);
/// participants.insert("Bob".to_string(), false);
///
/// assert!(rules.is_full(Some(&participants)).unwrap());
/// assert!(rules.validate_date_range("2024-11-01", "2024-11-01").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventRules {
    config: EventConfig,
}

impl EventRules {
    pub fn new(config: EventConfig) -> Self {
        EventRules { config }
    }

    pub fn config(&self) -> &EventConfig {
        &self.config
    }

    pub fn budget(&self, participant_count: i64, cost_per_participant: f64) -> EventResult<f64> {
        compute_event_budget(participant_count, cost_per_participant)
    }

    pub fn filter_by_name<S: AsRef<str>>(
        &self,
        participants: Option<&[S]>,
        search_text: &str,
    ) -> EventResult<Vec<String>> {
        filter_participants_by_name(participants, search_text)
    }

    pub fn confirmed_report(&self, participants: Option<&ConfirmationMap>) -> EventResult<Vec<String>> {
        build_confirmed_participants_report(participants)
    }

    /// See [`EventDateRange::parse`].
    pub fn date_range(&self, start_date: &str, end_date: &str) -> EventResult<EventDateRange> {
        EventDateRange::parse(start_date, end_date)
    }

    /// See [`crate::validate_event_date_range`].
    pub fn validate_date_range(&self, start_date: &str, end_date: &str) -> EventResult<bool> {
        validate_event_date_range(start_date, end_date)
    }

    /// Capacity check against `capacity.max_participants`.
    pub fn is_full(&self, participants: Option<&ConfirmationMap>) -> EventResult<bool> {
        is_event_full(participants, i64::from(self.config.capacity.max_participants))
    }
}
