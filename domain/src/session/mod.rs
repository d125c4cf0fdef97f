//! Session domain
//!
//! Recorded responses and the terminal outcome of a response-collection
//! session.

pub mod completion;
pub mod participants;
pub mod response;

pub use completion::{CompletionReason, SessionResult, expected_responses};
pub use participants::check_participant_ids;
pub use response::Response;
