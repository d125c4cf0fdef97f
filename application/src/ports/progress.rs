//! Progress notification port
//!
//! Defines the interface for reporting progress while a session collects
//! responses.

use foreach_domain::{CompletionReason, Response};

/// Callback for progress updates during a session
///
/// Implementations live in the presentation layer. All callbacks are
/// invoked from the coordinating task, never concurrently.
pub trait SessionProgressNotifier: Send + Sync {
    /// Called once, after every conversation has been started
    fn on_session_start(&self, participants: usize, statements: usize, max_time: u64);

    /// Called for each accepted response
    fn on_response_recorded(&self, response: &Response, recorded: usize, expected: usize);

    /// Called when a participant sends text matching no option
    fn on_invalid_response(&self, _participant: &str, _text: &str) {}

    /// Called when a participant has answered every statement
    fn on_participant_finished(&self, _participant: &str) {}

    /// Called once, when the session completes
    fn on_session_complete(&self, reason: CompletionReason, recorded: usize);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl SessionProgressNotifier for NoProgress {
    fn on_session_start(&self, _participants: usize, _statements: usize, _max_time: u64) {}
    fn on_response_recorded(&self, _response: &Response, _recorded: usize, _expected: usize) {}
    fn on_session_complete(&self, _reason: CompletionReason, _recorded: usize) {}
}
