//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod contactable;
pub mod progress;
pub mod transcript_logger;
