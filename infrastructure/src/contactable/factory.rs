//! Contactable factory
//!
//! Turns participant configurations into messaging endpoints.

use super::config::ParticipantConfig;
use super::scripted::ScriptedContactable;
use super::terminal::TerminalContactable;
use foreach_application::{Contactable, ContactableError};
use foreach_domain::check_participant_ids;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Build the endpoint for one participant
pub fn make_contactable(config: &ParticipantConfig) -> Arc<dyn Contactable> {
    debug!("Creating {} contactable for {}", config.kind(), config.id());
    match config {
        ParticipantConfig::Cli { id } => Arc::new(TerminalContactable::stdio(id.clone())),
        ParticipantConfig::Scripted {
            id,
            replies,
            reply_delay_ms,
        } => Arc::new(
            ScriptedContactable::new(id.clone(), replies.clone())
                .with_reply_delay(Duration::from_millis(*reply_delay_ms)),
        ),
    }
}

/// Build every participant's endpoint
///
/// Ids must be unique and non-empty, and only one participant can own
/// the terminal.
pub fn make_contactables(
    configs: &[ParticipantConfig],
) -> Result<Vec<Arc<dyn Contactable>>, ContactableError> {
    check_participant_ids(configs.iter().map(ParticipantConfig::id))?;

    let terminals = configs
        .iter()
        .filter(|c| matches!(c, ParticipantConfig::Cli { .. }))
        .count();
    if terminals > 1 {
        return Err(ContactableError::InvalidConfig(format!(
            "{} cli participants configured, but only one can use the terminal",
            terminals
        )));
    }

    Ok(configs.iter().map(make_contactable).collect())
}


#[cfg(test)]
mod session_tests {
    use super::*;
    use foreach_application::{RunResponseForEachInput, RunResponseForEachUseCase};
    use foreach_domain::{CompletionReason, Poll, ResponseOption, Statement};

    fn poll(max_time: u64) -> Poll {
        Poll::new(
            vec![
                ResponseOption::new("Agree", ["a"]),
                ResponseOption::new("Disagree", ["d"]),
            ],
            vec![Statement::new("great idea"), Statement::new("great idea 2")],
            max_time,
        )
    }

    fn scripted(id: &str, replies: &[&str]) -> ParticipantConfig {
        ParticipantConfig::Scripted {
            id: id.to_string(),
            replies: replies.iter().map(|r| r.to_string()).collect(),
            reply_delay_ms: 10,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_scripted_participants_complete_session() {
        let contactables =
            make_contactables(&[scripted("p1", &["a", "a"]), scripted("p2", &["x", "d", "d"])])
                .unwrap();

        let result = RunResponseForEachUseCase::new()
            .execute(RunResponseForEachInput::new(poll(60_000), contactables))
            .await;

        assert_eq!(result.reason, CompletionReason::AllCompleted);
        assert_eq!(result.responses.len(), 4);
        assert!(result.responses_from("p2").all(|r| r.response == "d"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_short_script_ends_by_timeout() {
        let contactables =
            make_contactables(&[scripted("p1", &["a", "a"]), scripted("p2", &["d"])]).unwrap();

        let result = RunResponseForEachUseCase::new()
            .execute(RunResponseForEachInput::new(poll(1_000), contactables))
            .await;

        assert_eq!(result.reason, CompletionReason::Timeout);
        assert_eq!(result.responses.len(), 3);
    }
}
