//! Infrastructure layer for response-foreach
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus the configuration and session file I/O.

pub mod config;
pub mod contactable;
pub mod io;
pub mod logging;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileConfig, FileOutputFormat};
pub use contactable::{
    ParticipantConfig, ScriptedContactable, TerminalContactable, make_contactable,
    make_contactables,
};
pub use io::{IoError, SessionInput, read_input, read_input_file, write_output};
pub use logging::JsonlTranscriptLogger;
