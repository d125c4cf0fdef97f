//! Contactable adapters
//!
//! Implementations of the [`Contactable`](foreach_application::Contactable)
//! port, selected per participant by the `type` of its configuration:
//!
//! | `type` | Adapter | Transport |
//! |---|---|---|
//! | `cli` | [`TerminalContactable`] | stdin / stdout |
//! | `scripted` | [`ScriptedContactable`] | fixed replies |

mod config;
mod factory;
mod scripted;
mod terminal;

pub use config::ParticipantConfig;
pub use factory::{make_contactable, make_contactables};
pub use scripted::ScriptedContactable;
pub use terminal::TerminalContactable;
