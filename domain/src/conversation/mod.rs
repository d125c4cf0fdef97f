//! Per-participant conversation
//!
//! Each participant is walked through the statements one at a time. The
//! state machine here is pure: it consumes inbound text and returns the
//! effects (things to say, responses to record) for a driver to perform.
//!
//! ```text
//! Greeting ──start──► AwaitingResponse(0) ──valid──► ... ──valid──► AllAnswered
//!                          │   ▲
//!                          └───┘ invalid (re-prompt, no progress)
//! ```

pub mod messages;
pub mod state;

pub use messages::{
    ALL_COMPLETED_TEXT, INVALID_RESPONSE_TEXT, MAX_RESPONSES_TEXT, TIMEOUT_TEXT, options_text,
    prompt_text, rules_text,
};
pub use state::{Conversation, ConversationEffect, ConversationState};
