//! Output format value object

use serde::{Deserialize, Serialize};

/// How session results are printed once the session completes
///
/// The results file is always written; this only controls stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Per-statement tallies and completion reason (default)
    #[default]
    Summary,
    /// Raw responses as JSON
    Json,
    /// Print nothing
    None,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_summary() {
        assert_eq!(OutputFormat::default(), OutputFormat::Summary);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Json).unwrap();
        assert_eq!(json, "\"json\"");
    }

    #[test]
    fn test_deserialize_lowercase() {
        let format: OutputFormat = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(format, OutputFormat::None);
    }
}
