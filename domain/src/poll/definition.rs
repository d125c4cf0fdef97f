//! Poll definition

use super::option::ResponseOption;
use super::statement::Statement;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Everything a session needs to know besides who takes part
///
/// Empty `options` or `statements` are legal: with no options every
/// response is invalid, with no statements participants are done at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poll {
    pub options: Vec<ResponseOption>,
    pub statements: Vec<Statement>,
    /// Time budget in milliseconds
    pub max_time: u64,
}

impl Poll {
    pub fn new(options: Vec<ResponseOption>, statements: Vec<Statement>, max_time: u64) -> Self {
        Self {
            options,
            statements,
            max_time,
        }
    }

    pub fn max_duration(&self) -> Duration {
        Duration::from_millis(self.max_time)
    }

    /// Responses needed from `participants` people to complete the session
    pub fn expected_responses(&self, participants: usize) -> usize {
        crate::session::expected_responses(participants, self.statements.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_duration() {
        let poll = Poll::new(vec![], vec![], 1500);
        assert_eq!(poll.max_duration(), Duration::from_millis(1500));
    }

    #[test]
    fn test_expected_responses_scales_with_statements() {
        let poll = Poll::new(
            vec![],
            vec![Statement::new("one"), Statement::new("two")],
            1000,
        );
        assert_eq!(poll.expected_responses(3), 6);
        assert_eq!(poll.expected_responses(0), 0);
    }
}
