//! Recorded response entity

use crate::poll::Statement;
use serde::{Deserialize, Serialize};

/// One accepted answer from one participant to one statement
///
/// Created exactly once per valid message and never mutated afterward.
/// The serialized shape (`statement`, `response`, `id`, `timestamp`) is the
/// session output format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// The statement being answered
    pub statement: Statement,
    /// Raw accepted text
    pub response: String,
    /// Participant id
    pub id: String,
    /// Capture time (milliseconds since epoch)
    pub timestamp: u64,
}

impl Response {
    /// Record a response with an explicit capture time
    pub fn at(
        statement: Statement,
        response: impl Into<String>,
        id: impl Into<String>,
        timestamp: u64,
    ) -> Self {
        Self {
            statement,
            response: response.into(),
            id: id.into(),
            timestamp,
        }
    }
}

/// Get current timestamp in milliseconds
pub fn current_timestamp() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let response = Response::at(Statement::new("great idea"), "a", "p1", 42);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "statement": {"text": "great idea"},
                "response": "a",
                "id": "p1",
                "timestamp": 42
            })
        );
    }

    #[test]
    fn test_current_timestamp_is_unix_millis() {
        // 2020-09-13 in milliseconds; seconds would be three digits shorter
        assert!(current_timestamp() > 1_600_000_000_000);
    }
}
