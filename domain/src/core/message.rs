//! Visitor message value object

use serde::{Deserialize, Serialize};

/// A message typed into the chat widget by a site visitor (Value Object)
///
/// Always non-blank. The original text is preserved verbatim so canned
/// answer matching sees exactly what the visitor sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorMessage {
    content: String,
}

impl VisitorMessage {
    /// Try to create a new message, returning None if it is empty or only whitespace
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    /// Get the message content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for VisitorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_empty() {
        assert!(VisitorMessage::try_new("").is_none());
        assert!(VisitorMessage::try_new("  \n\t").is_none());
    }

    #[test]
    fn test_try_new_keeps_text_verbatim() {
        let msg = VisitorMessage::try_new("  Who is Danu?").unwrap();
        assert_eq!(msg.content(), "  Who is Danu?");
        assert_eq!(msg.into_content(), "  Who is Danu?");
    }
}
