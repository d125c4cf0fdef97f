//! Application layer for response-foreach
//!
//! This crate contains the session use case and the port definitions
//! adapters implement. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SessionSettings;
pub use ports::{
    contactable::{Contactable, ContactableError, Inbox},
    progress::{NoProgress, SessionProgressNotifier},
    transcript_logger::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger},
};
pub use use_cases::run_response_for_each::{RunResponseForEachInput, RunResponseForEachUseCase};
