//! Participant configuration

use serde::{Deserialize, Serialize};

/// How to reach one participant, as written in `participants_config`
///
/// The `type` field selects the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ParticipantConfig {
    /// The person at this terminal (stdin/stdout)
    Cli { id: String },
    /// Replays fixed replies, for dry runs and demos
    Scripted {
        id: String,
        #[serde(default)]
        replies: Vec<String>,
        /// Pause before each reply
        #[serde(default)]
        reply_delay_ms: u64,
    },
}

impl ParticipantConfig {
    pub fn id(&self) -> &str {
        match self {
            ParticipantConfig::Cli { id } | ParticipantConfig::Scripted { id, .. } => id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ParticipantConfig::Cli { .. } => "cli",
            ParticipantConfig::Scripted { .. } => "scripted",
        }
    }
}
