//! # Error Types
//!
//! Error types for event-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  EventError   - rejected input to one of the event operations          │
//! │  └── InvalidArgument(message)                                          │
//! │                                                                         │
//! │  ConfigError  - loading/saving events.toml (config.rs only)            │
//! │  ├── InvalidConfig                                                     │
//! │  ├── Io                                                                │
//! │  ├── Parse                                                             │
//! │  └── Serialize                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. `InvalidArgument` displays its message verbatim, callers match on it
//! 3. Operations never return `ConfigError`, the loader never returns `EventError`

use thiserror::Error;

// =============================================================================
// Event Error
// =============================================================================

/// Failure of an event operation.
///
/// Every failure is a defect in the caller's input. Nothing is retried and
/// nothing is partially applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    /// A precondition on the input did not hold.
    ///
    /// ## When This Occurs
    /// - Cost per participant is zero or negative
    /// - Participant list or map is absent
    /// - Dates don't parse, or start is not before end
    /// - Capacity is negative
    #[error("{0}")]
    InvalidArgument(String),
}

impl EventError {
    /// Builds an [`EventError::InvalidArgument`] from any message.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        EventError::InvalidArgument(message.into())
    }

    /// Returns the human-readable message.
    pub fn message(&self) -> &str {
        match self {
            EventError::InvalidArgument(message) => message,
        }
    }
}

/// Convenience type alias for Results with EventError.
pub type EventResult<T> = Result<T, EventError>;

// =============================================================================
// Config Error
// =============================================================================

/// Failure while loading, validating or saving [`crate::config::EventConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value in the config is unusable.
    #[error("Invalid event configuration: {0}")]
    InvalidConfig(String),

    /// Reading or writing the config file failed.
    #[error("Config file error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for this schema.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be written as TOML.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Convenience type alias for Results with ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_displays_message_verbatim() {
        let err = EventError::invalid_argument("There should be a cost per participant");
        assert_eq!(err.to_string(), "There should be a cost per participant");
        assert_eq!(err.message(), "There should be a cost per participant");
    }

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::InvalidConfig("dates.format must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid event configuration: dates.format must not be empty"
        );
    }

    #[test]
    fn test_io_error_converts_to_config_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ConfigError = io_err.into();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
