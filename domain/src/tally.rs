//! Aggregation of recorded responses
//!
//! Counts, per statement, how many responses selected each option. The
//! selected option is the one the validator picks for the response text,
//! so a wildcard option collects everything not claimed by an earlier one.

use crate::poll::{Poll, Statement};
use crate::session::Response;
use serde::{Deserialize, Serialize};

/// Count of responses for one option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionCount {
    pub option: String,
    pub count: usize,
}

/// Per-option counts for one statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementTally {
    pub statement: Statement,
    /// One entry per configured option, in configured order
    pub counts: Vec<OptionCount>,
    /// Responses recorded for this statement
    pub total: usize,
}

impl StatementTally {
    /// Option with the most responses; `None` when nothing was recorded or
    /// the top count is shared
    pub fn leader(&self) -> Option<&OptionCount> {
        let max = self.counts.iter().map(|c| c.count).max()?;
        if max == 0 {
            return None;
        }
        let mut leaders = self.counts.iter().filter(|c| c.count == max);
        let first = leaders.next();
        if leaders.next().is_some() { None } else { first }
    }
}

/// Tally `responses` against the poll's statements and options
///
/// Responses are attributed to the first statement equal to the one they
/// carry; identical statements therefore share one tally.
pub fn tally(poll: &Poll, responses: &[Response]) -> Vec<StatementTally> {
    let mut tallies: Vec<StatementTally> = poll
        .statements
        .iter()
        .map(|statement| StatementTally {
            statement: statement.clone(),
            counts: poll
                .options
                .iter()
                .map(|o| OptionCount {
                    option: o.text.clone(),
                    count: 0,
                })
                .collect(),
            total: 0,
        })
        .collect();

    for response in responses {
        let Some(index) = poll
            .statements
            .iter()
            .position(|s| s == &response.statement)
        else {
            continue;
        };
        let entry = &mut tallies[index];
        entry.total += 1;

        // Same first-match rule as `is_valid`, by position
        if let Some(option_index) = poll
            .options
            .iter()
            .position(|o| o.matches(&response.response))
        {
            entry.counts[option_index].count += 1;
        }
    }

    tallies
}
