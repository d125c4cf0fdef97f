//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Raised only while assembling a session. Once a session runs, invalid
/// responses and timeouts are ordinary outcomes, not errors.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Participant id cannot be empty")]
    EmptyParticipantId,

    #[error("Duplicate participant id: {0}")]
    DuplicateParticipant(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DomainError::EmptyParticipantId.to_string(),
            "Participant id cannot be empty"
        );
        assert_eq!(
            DomainError::DuplicateParticipant("p1".to_string()).to_string(),
            "Duplicate participant id: p1"
        );
    }
}
