//! Run Response-For-Each use case
//!
//! Sends every participant the same ordered statements, collects the
//! responses that match a configured option, and completes when everyone
//! has answered everything or the time budget runs out.
//!
//! # Architecture
//!
//! ```text
//!                  ┌──────────────────────────┐
//!   deadline ────► │       Coordinator        │ ◄─── Recorded / Rejected / Finished
//!                  │  results, one-shot done  │            ▲
//!                  └────────────┬─────────────┘            │ mpsc
//!                               │ complete()               │
//!                  cancel + announce to all        ┌───────┴────────┐
//!                                                  │ Driver (per p) │ ◄──► Contactable
//!                                                  └────────────────┘
//! ```
//!
//! Drivers run as independent tasks; the coordinator runs on the caller's
//! task and is the only place results are mutated.

mod coordinator;
mod driver;

use crate::ports::contactable::Contactable;
use crate::ports::progress::{NoProgress, SessionProgressNotifier};
use crate::ports::transcript_logger::{NoTranscriptLogger, TranscriptLogger};
use coordinator::Coordinator;
use driver::ConversationDriver;
use foreach_domain::{Poll, Response, SessionResult};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Input for the RunResponseForEach use case
pub struct RunResponseForEachInput {
    /// Options, statements and time budget
    pub poll: Poll,
    /// One endpoint per participant
    pub contactables: Vec<Arc<dyn Contactable>>,
}

impl RunResponseForEachInput {
    pub fn new(poll: Poll, contactables: Vec<Arc<dyn Contactable>>) -> Self {
        Self { poll, contactables }
    }
}

/// Use case for collecting one response per statement from each participant
///
/// Never fails: invalid responses are re-prompted, and a session that
/// cannot finish ends with whatever was collected when time runs out.
pub struct RunResponseForEachUseCase {
    transcript: Arc<dyn TranscriptLogger>,
}

impl Default for RunResponseForEachUseCase {
    fn default() -> Self {
        Self::new()
    }
}

impl RunResponseForEachUseCase {
    pub fn new() -> Self {
        Self {
            transcript: Arc::new(NoTranscriptLogger),
        }
    }

    /// Record every message exchanged to a transcript
    pub fn with_transcript_logger(mut self, logger: Arc<dyn TranscriptLogger>) -> Self {
        self.transcript = logger;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunResponseForEachInput) -> SessionResult {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute and hand the collected responses to `on_complete`
    pub async fn run<F>(&self, input: RunResponseForEachInput, on_complete: F)
    where
        F: FnOnce(Vec<Response>),
    {
        let result = self.execute(input).await;
        on_complete(result.responses);
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunResponseForEachInput,
        progress: &dyn SessionProgressNotifier,
    ) -> SessionResult {
        let RunResponseForEachInput { poll, contactables } = input;
        let poll = Arc::new(poll);
        let expected = poll.expected_responses(contactables.len());

        info!(
            "Starting session with {} participants, {} statements, {}ms max",
            contactables.len(),
            poll.statements.len(),
            poll.max_time
        );

        // The clock starts before anyone is contacted
        let deadline = Instant::now() + poll.max_duration();

        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let mut drivers = JoinSet::new();

        for contactable in &contactables {
            let driver = ConversationDriver::new(
                Arc::clone(contactable),
                Arc::clone(&poll),
                events_tx.clone(),
                Arc::clone(&self.transcript),
            );
            drivers.spawn(driver.run(cancel.child_token()));
        }
        // Only drivers hold senders, so the channel closes when they all end
        drop(events_tx);

        progress.on_session_start(contactables.len(), poll.statements.len(), poll.max_time);

        let coordinator = Coordinator::new(
            contactables,
            expected,
            cancel,
            Arc::clone(&self.transcript),
        );
        let result = coordinator.run(events_rx, deadline, progress).await;

        drivers.shutdown().await;
        result
    }
}
