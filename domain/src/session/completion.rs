//! Session completion types

use super::response::Response;
use crate::conversation::messages::{ALL_COMPLETED_TEXT, TIMEOUT_TEXT};
use serde::{Deserialize, Serialize};

/// Which trigger ended the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionReason {
    /// Every participant answered every statement
    AllCompleted,
    /// The max time elapsed first
    Timeout,
}

impl CompletionReason {
    /// Text broadcast to every participant when the session ends
    pub fn announcement(&self) -> &'static str {
        match self {
            CompletionReason::AllCompleted => ALL_COMPLETED_TEXT,
            CompletionReason::Timeout => TIMEOUT_TEXT,
        }
    }
}

impl std::fmt::Display for CompletionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompletionReason::AllCompleted => write!(f, "All completed"),
            CompletionReason::Timeout => write!(f, "Timeout"),
        }
    }
}

/// Frozen outcome of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResult {
    /// Accepted responses, in the order they were recorded
    pub responses: Vec<Response>,
    pub reason: CompletionReason,
}

impl SessionResult {
    pub fn new(responses: Vec<Response>, reason: CompletionReason) -> Self {
        Self { responses, reason }
    }

    pub fn is_timeout(&self) -> bool {
        self.reason == CompletionReason::Timeout
    }

    /// Responses given by one participant, in their own answering order
    pub fn responses_from<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Response> + 'a {
        self.responses.iter().filter(move |r| r.id == id)
    }
}

/// Number of responses that completes a session
pub fn expected_responses(participants: usize, statements: usize) -> usize {
    participants * statements
}
