//! Session settings: how the binary runs a session.
//!
//! [`SessionSettings`] holds the knobs that sit around a session rather
//! than inside it: the fallback time budget and how long to linger after
//! results are handed off so queued messages can still go out.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings surrounding a session run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Budget used when neither the command line nor the input gives one
    pub default_max_time: Option<Duration>,
    /// Delay between writing results and exiting
    pub exit_grace: Duration,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            default_max_time: None,
            exit_grace: Duration::from_millis(2000),
        }
    }
}

impl SessionSettings {
    // ==================== Builder Methods ====================

    pub fn with_default_max_time(mut self, max_time: Duration) -> Self {
        self.default_max_time = Some(max_time);
        self
    }

    pub fn with_exit_grace(mut self, grace: Duration) -> Self {
        self.exit_grace = grace;
        self
    }

    // ==================== Resolution ====================

    /// Pick the time budget in milliseconds
    ///
    /// Priority: explicit override, then the session input, then the
    /// configured default. `None` when no source provides one.
    pub fn resolve_max_time(&self, override_ms: Option<u64>, input_ms: Option<u64>) -> Option<u64> {
        override_ms
            .or(input_ms)
            .or_else(|| self.default_max_time.map(|d| d.as_millis() as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grace_is_two_seconds() {
        assert_eq!(SessionSettings::default().exit_grace, Duration::from_secs(2));
    }

    #[test]
    fn test_override_beats_input_and_default() {
        let settings =
            SessionSettings::default().with_default_max_time(Duration::from_millis(5000));
        assert_eq!(settings.resolve_max_time(Some(10), Some(20)), Some(10));
        assert_eq!(settings.resolve_max_time(None, Some(20)), Some(20));
        assert_eq!(settings.resolve_max_time(None, None), Some(5000));
    }

    #[test]
    fn test_no_source_yields_none() {
        assert_eq!(SessionSettings::default().resolve_max_time(None, None), None);
    }
}
