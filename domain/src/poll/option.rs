//! Response option value object

use serde::{Deserialize, Serialize};

/// Trigger value that matches any incoming response text.
pub const WILDCARD_TRIGGER: &str = "*";

/// One selectable answer for every statement (Value Object)
///
/// `text` is the human readable meaning (e.g. `"Agree"`), `triggers` are the
/// literal strings a participant can send to pick it (e.g. `["a", "agree"]`).
///
/// # Example
///
/// ```
/// use foreach_domain::poll::ResponseOption;
///
/// let agree = ResponseOption::new("Agree", ["a", "A"]);
/// assert!(agree.matches("a"));
/// assert!(!agree.matches("agree"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseOption {
    /// Human readable label
    pub text: String,
    /// Accepted literal responses, checked in order
    #[serde(default)]
    pub triggers: Vec<String>,
}

impl ResponseOption {
    pub fn new<I, S>(text: impl Into<String>, triggers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text: text.into(),
            triggers: triggers.into_iter().map(Into::into).collect(),
        }
    }

    /// Option accepting any response
    pub fn wildcard(text: impl Into<String>) -> Self {
        Self::new(text, [WILDCARD_TRIGGER])
    }

    /// Whether one of the triggers accepts `text` verbatim (or is the wildcard)
    pub fn matches(&self, text: &str) -> bool {
        self.triggers
            .iter()
            .any(|trigger| trigger == text || trigger == WILDCARD_TRIGGER)
    }
}

impl std::fmt::Display for ResponseOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.text, self.triggers.join(", "))
    }
}
