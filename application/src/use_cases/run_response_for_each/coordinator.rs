//! Completion coordinator
//!
//! The single owner of the collected responses and the session timer.
//! Drivers report over a channel; the coordinator races those reports
//! against the deadline and completes the session exactly once.
//! [`Coordinator::complete`] consumes the coordinator, so a second
//! completion cannot be expressed.

use crate::ports::contactable::Contactable;
use crate::ports::progress::SessionProgressNotifier;
use crate::ports::transcript_logger::{TranscriptEvent, TranscriptLogger};
use foreach_domain::{CompletionReason, Response, SessionResult};
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Report from a conversation driver
#[derive(Debug)]
pub(super) enum CoordinatorEvent {
    /// A valid response was accepted
    Recorded(Response),
    /// A response matched no option
    Rejected { participant: String, text: String },
    /// A participant answered every statement
    Finished { participant: String },
}

pub(super) struct Coordinator {
    contactables: Vec<Arc<dyn Contactable>>,
    expected: usize,
    results: Vec<Response>,
    drivers: CancellationToken,
    logger: Arc<dyn TranscriptLogger>,
}

impl Coordinator {
    pub(super) fn new(
        contactables: Vec<Arc<dyn Contactable>>,
        expected: usize,
        drivers: CancellationToken,
        logger: Arc<dyn TranscriptLogger>,
    ) -> Self {
        Self {
            contactables,
            expected,
            results: Vec::with_capacity(expected),
            drivers,
            logger,
        }
    }

    /// Collect reports until everyone is done or `deadline` passes
    ///
    /// If both are ready at once the timeout wins.
    pub(super) async fn run(
        mut self,
        mut events: mpsc::UnboundedReceiver<CoordinatorEvent>,
        deadline: Instant,
        progress: &dyn SessionProgressNotifier,
    ) -> SessionResult {
        let timer = tokio::time::sleep_until(deadline);
        tokio::pin!(timer);

        let reason = loop {
            tokio::select! {
                biased;
                _ = &mut timer => break CompletionReason::Timeout,
                event = events.recv() => match event {
                    Some(CoordinatorEvent::Recorded(response)) => {
                        self.record(response, progress);
                        if self.check_completion() {
                            break CompletionReason::AllCompleted;
                        }
                    }
                    Some(CoordinatorEvent::Rejected { participant, text }) => {
                        progress.on_invalid_response(&participant, &text);
                    }
                    Some(CoordinatorEvent::Finished { participant }) => {
                        info!("Participant {} has responded to everything", participant);
                        progress.on_participant_finished(&participant);
                    }
                    None => {
                        // No driver left to report; only the timer can end the session
                        debug!("All conversations ended, waiting for the deadline");
                        (&mut timer).await;
                        break CompletionReason::Timeout;
                    }
                },
            }
        };

        // Late reports are dropped from here on
        drop(events);
        self.complete(reason, progress).await
    }

    fn record(&mut self, response: Response, progress: &dyn SessionProgressNotifier) {
        progress.on_response_recorded(&response, self.results.len() + 1, self.expected);
        self.logger.log(TranscriptEvent::ResponseRecorded(response.clone()));
        self.results.push(response);
    }

    fn check_completion(&self) -> bool {
        self.results.len() == self.expected
    }

    async fn complete(
        self,
        reason: CompletionReason,
        progress: &dyn SessionProgressNotifier,
    ) -> SessionResult {
        info!(
            "Session complete ({}): {}/{} responses",
            reason,
            self.results.len(),
            self.expected
        );

        self.drivers.cancel();

        let announcement = reason.announcement();
        let logger = &self.logger;
        join_all(self.contactables.iter().map(|contactable| async move {
            logger.log(TranscriptEvent::speak(contactable.id(), announcement));
            if let Err(e) = contactable.speak(announcement).await {
                warn!("Failed to announce completion to {}: {}", contactable.id(), e);
            }
        }))
        .await;

        self.logger.log(TranscriptEvent::SessionComplete {
            reason,
            responses: self.results.len(),
            expected: self.expected,
        });
        progress.on_session_complete(reason, self.results.len());

        SessionResult::new(self.results, reason)
    }
}
