//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.
//!
//! ```toml
//! [session]
//! max_time_ms = 600000
//! exit_grace_ms = 2000
//!
//! [output]
//! format = "summary"
//! color = true
//! progress = true
//!
//! [logging]
//! transcript = "logs/transcript.jsonl"
//! ```

use foreach_application::SessionSettings;
use foreach_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

// Re-export OutputFormat from domain for convenience
pub use foreach_domain::OutputFormat as FileOutputFormat;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("session.max_time_ms cannot be 0")]
    ZeroMaxTime,

    #[error("logging.transcript cannot be an empty path")]
    EmptyTranscriptPath,
}

/// Raw session configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Fallback time budget when the input file has no `max_time`
    pub max_time_ms: Option<u64>,
    /// How long to wait after writing results before exiting
    pub exit_grace_ms: u64,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            max_time_ms: None,
            exit_grace_ms: 2000,
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
    /// Show a progress bar while collecting
    pub progress: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            progress: true,
        }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Path of the JSONL transcript; no transcript when unset
    pub transcript: Option<String>,
}

/// Complete configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub session: FileSessionConfig,
    pub output: FileOutputConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate values serde cannot rule out
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.session.max_time_ms == Some(0) {
            return Err(ConfigValidationError::ZeroMaxTime);
        }
        if let Some(path) = &self.logging.transcript
            && path.trim().is_empty()
        {
            return Err(ConfigValidationError::EmptyTranscriptPath);
        }
        Ok(())
    }

    /// Convert to the application's session settings
    pub fn session_settings(&self) -> SessionSettings {
        let settings = SessionSettings::default()
            .with_exit_grace(Duration::from_millis(self.session.exit_grace_ms));
        match self.session.max_time_ms {
            Some(ms) => settings.with_default_max_time(Duration::from_millis(ms)),
            None => settings,
        }
    }

    /// Output format, defaulting to the summary
    pub fn output_format(&self) -> OutputFormat {
        self.output.format.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.session.exit_grace_ms, 2000);
        assert!(config.session.max_time_ms.is_none());
        assert!(config.output.color);
        assert_eq!(config.output_format(), OutputFormat::Summary);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: FileConfig = toml::from_str(
            r#"
            [session]
            max_time_ms = 60000

            [output]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.session.max_time_ms, Some(60000));
        assert_eq!(config.session.exit_grace_ms, 2000);
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert!(config.output.progress);
    }

    #[test]
    fn test_zero_max_time_rejected() {
        let mut config = FileConfig::default();
        config.session.max_time_ms = Some(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::ZeroMaxTime)
        ));
    }

    #[test]
    fn test_blank_transcript_rejected() {
        let mut config = FileConfig::default();
        config.logging.transcript = Some("  ".to_string());
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::EmptyTranscriptPath)
        ));
    }

    #[test]
    fn test_session_settings_conversion() {
        let mut config = FileConfig::default();
        config.session.max_time_ms = Some(1500);
        config.session.exit_grace_ms = 0;

        let settings = config.session_settings();
        assert_eq!(settings.default_max_time, Some(Duration::from_millis(1500)));
        assert_eq!(settings.exit_grace, Duration::ZERO);
    }
}
