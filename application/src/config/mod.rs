//! Application-level configuration.
//!
//! - [`SessionSettings`]: time budget fallback and exit grace period

pub mod session_settings;

pub use session_settings::SessionSettings;
