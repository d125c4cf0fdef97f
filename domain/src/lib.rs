//! Domain layer for response-foreach
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Poll
//!
//! A fixed list of [`ResponseOption`]s and an ordered list of
//! [`Statement`]s. Every participant answers every statement, in order,
//! by sending one of an option's triggers.
//!
//! ## Conversation
//!
//! One participant's walk through the statements, modelled as a pure
//! state machine ([`Conversation`]) that turns inbound text into effects.
//!
//! ## Session
//!
//! The accepted [`Response`]s and the [`CompletionReason`] that ended
//! collection: either everyone answered everything, or time ran out.

pub mod config;
pub mod conversation;
pub mod core;
pub mod poll;
pub mod session;
pub mod tally;

// Re-export commonly used types
pub use config::OutputFormat;
pub use conversation::{Conversation, ConversationEffect, ConversationState};
pub use core::error::DomainError;
pub use poll::{Poll, ResponseOption, Statement, WILDCARD_TRIGGER, is_valid};
pub use session::{
    CompletionReason, Response, SessionResult, check_participant_ids, expected_responses,
};
pub use tally::{OptionCount, StatementTally, tally};
