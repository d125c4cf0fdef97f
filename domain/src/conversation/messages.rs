//! Fixed texts spoken to participants

use crate::poll::{ResponseOption, Statement};

pub const INVALID_RESPONSE_TEXT: &str = "That's not a valid response, please try again.";
pub const MAX_RESPONSES_TEXT: &str = "You've responded to everything. Thanks for participating. You will be notified when everyone has completed.";
pub const ALL_COMPLETED_TEXT: &str = "Everyone has completed. Thanks for participating.";
pub const TIMEOUT_TEXT: &str =
    "The max time has been reached. Stopping now. Thanks for participating.";

/// Rules message, sent first
pub fn rules_text(max_time: u64) -> String {
    format!("The process will stop automatically after {max_time} milliseconds.")
}

/// Summary of every option and its triggers, sent after the rules
pub fn options_text(options: &[ResponseOption]) -> String {
    let rendered = options
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("The options for each statement are: {rendered}")
}

/// Prompt for statement `index`, annotated with how many follow it
///
/// `index` must be in bounds.
pub fn prompt_text(statements: &[Statement], index: usize) -> String {
    let remaining = statements.len() - 1 - index;
    format!("({remaining} remaining) {}", statements[index].text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_text_embeds_max_time() {
        assert_eq!(
            rules_text(60000),
            "The process will stop automatically after 60000 milliseconds."
        );
    }

    #[test]
    fn test_options_text() {
        let options = vec![
            ResponseOption::new("Agree", ["a", "A"]),
            ResponseOption::new("Disagree", ["d"]),
        ];
        assert_eq!(
            options_text(&options),
            "The options for each statement are: Agree (a, A), Disagree (d)"
        );
    }

    #[test]
    fn test_options_text_empty() {
        assert_eq!(options_text(&[]), "The options for each statement are: ");
    }

    #[test]
    fn test_prompt_text_counts_down() {
        let statements = vec![Statement::new("first"), Statement::new("second")];
        assert_eq!(prompt_text(&statements, 0), "(1 remaining) first");
        assert_eq!(prompt_text(&statements, 1), "(0 remaining) second");
    }
}
