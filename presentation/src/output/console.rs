//! Console output formatter for session results

use colored::Colorize;
use foreach_domain::core::string::{single_line, truncate};
use foreach_domain::{CompletionReason, Poll, SessionResult, StatementTally, tally};

const STATEMENT_WIDTH: usize = 56;

/// Formats session results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete session result
    pub fn format(result: &SessionResult, poll: &Poll, participants: usize) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Response Results"));
        output.push('\n');

        let reason = match result.reason {
            CompletionReason::AllCompleted => result.reason.to_string().green().bold(),
            CompletionReason::Timeout => result.reason.to_string().yellow().bold(),
        };
        output.push_str(&format!("{} {}\n", "Completed:".cyan().bold(), reason));

        output.push_str(&format!(
            "{} {}/{} from {} participant(s)\n",
            "Responses:".cyan().bold(),
            result.responses.len(),
            poll.expected_responses(participants),
            participants
        ));

        output.push_str(&Self::section_header("Statements"));
        let tallies = tally(poll, &result.responses);
        if tallies.is_empty() {
            output.push_str(&format!("\n{}\n", "(no statements)".dimmed()));
        }
        for (index, entry) in tallies.iter().enumerate() {
            output.push_str(&Self::format_tally(index, entry));
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(result: &SessionResult) -> String {
        serde_json::to_string_pretty(&result.responses).unwrap_or_else(|_| "[]".to_string())
    }

    fn format_tally(index: usize, entry: &StatementTally) -> String {
        let mut output = format!(
            "\n{}\n",
            format!(
                "{}. {}",
                index + 1,
                truncate(&single_line(&entry.statement.text), STATEMENT_WIDTH)
            )
            .yellow()
            .bold()
        );

        let leader = entry.leader().map(|l| l.option.as_str());
        for count in &entry.counts {
            let line = format!("{:>4}  {}", count.count, count.option);
            if leader == Some(count.option.as_str()) {
                output.push_str(&format!("  {}\n", line.green()));
            } else {
                output.push_str(&format!("  {}\n", line));
            }
        }
        output.push_str(&format!("  {}\n", format!("{:>4}  total", entry.total).dimmed()));

        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
