//! Port for structured transcript logging.
//!
//! A transcript is the machine-readable record of a session: every text
//! spoken to or heard from a participant, every accepted response, and how
//! the session ended. It is kept apart from `tracing`, which carries
//! human-readable diagnostics.

use foreach_domain::{CompletionReason, Response};
use serde::Serialize;

/// One entry of a session transcript.
///
/// Serializes with a `type` tag, e.g.
/// `{"type":"hear","participant":"p1","text":"a"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TranscriptEvent {
    /// Text sent to a participant
    Speak { participant: String, text: String },
    /// Text received from a participant
    Hear { participant: String, text: String },
    /// A response was accepted into the session results
    ResponseRecorded(Response),
    /// The session ended
    SessionComplete {
        reason: CompletionReason,
        responses: usize,
        expected: usize,
    },
}

impl TranscriptEvent {
    pub fn speak(participant: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Speak {
            participant: participant.into(),
            text: text.into(),
        }
    }

    pub fn hear(participant: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Hear {
            participant: participant.into(),
            text: text.into(),
        }
    }
}

/// Port for logging transcript events.
///
/// `log` is synchronous and non-fallible; logging failures never disturb
/// the session.
pub trait TranscriptLogger: Send + Sync {
    fn log(&self, event: TranscriptEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoTranscriptLogger;

impl TranscriptLogger for NoTranscriptLogger {
    fn log(&self, _event: TranscriptEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use foreach_domain::Statement;

    #[test]
    fn test_speak_serializes_with_type_tag() {
        let value = serde_json::to_value(TranscriptEvent::speak("p1", "hello")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"type": "speak", "participant": "p1", "text": "hello"})
        );
    }

    #[test]
    fn test_recorded_response_fields_are_inlined() {
        let response = Response::at(Statement::new("great idea"), "a", "p2", 7);
        let value = serde_json::to_value(TranscriptEvent::ResponseRecorded(response)).unwrap();

        assert_eq!(value["type"], "response_recorded");
        assert_eq!(value["statement"]["text"], "great idea");
        assert_eq!(value["response"], "a");
        assert_eq!(value["id"], "p2");
        assert_eq!(value["timestamp"], 7);
    }

    #[test]
    fn test_session_complete_reason_is_snake_case() {
        let event = TranscriptEvent::SessionComplete {
            reason: CompletionReason::AllCompleted,
            responses: 4,
            expected: 4,
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["reason"], "all_completed");
        assert_eq!(value["responses"], 4);
    }
}
