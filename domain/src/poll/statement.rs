//! Statement value object

use serde::{Deserialize, Serialize};

/// A prompt every participant responds to (Value Object)
///
/// `id` optionally identifies who authored the statement; it is carried
/// through to the recorded responses untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Statement {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            id: None,
        }
    }

    /// Attach the author/source id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl From<&str> for Statement {
    fn from(s: &str) -> Self {
        Statement::new(s)
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_without_id_omits_field() {
        let json = serde_json::to_value(Statement::new("great idea")).unwrap();
        assert_eq!(json, serde_json::json!({"text": "great idea"}));
    }

    #[test]
    fn test_statement_with_id_round_trips_author() {
        let statement: Statement =
            serde_json::from_str(r#"{"text":"great idea","id":"alice"}"#).unwrap();
        assert_eq!(statement, Statement::new("great idea").with_id("alice"));
    }
}
