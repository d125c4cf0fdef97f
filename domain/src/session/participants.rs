//! Participant identity checks

use crate::core::error::DomainError;
use std::collections::HashSet;

/// Ensure every participant id is non-empty and unique
///
/// Responses are attributed by id, so two endpoints sharing one would be
/// indistinguishable in the results.
pub fn check_participant_ids<'a, I>(ids: I) -> Result<(), DomainError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            return Err(DomainError::EmptyParticipantId);
        }
        if !seen.insert(id) {
            return Err(DomainError::DuplicateParticipant(id.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_ids_pass() {
        assert!(check_participant_ids(["p1", "p2"]).is_ok());
        assert!(check_participant_ids(std::iter::empty()).is_ok());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = check_participant_ids(["p1", "p2", "p1"]).unwrap_err();
        assert!(matches!(err, DomainError::DuplicateParticipant(id) if id == "p1"));
    }

    #[test]
    fn test_blank_id_rejected() {
        let err = check_participant_ids(["p1", "  "]).unwrap_err();
        assert!(matches!(err, DomainError::EmptyParticipantId));
    }
}
