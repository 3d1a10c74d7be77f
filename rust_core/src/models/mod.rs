// Shared models for the comment pipeline
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Intent
// ============================================================================

/// Classified purpose of a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    #[serde(rename = "RMT")]
    RateMyTeam,
    Transfer,
    Comparison,
    Unknown,
}

impl Intent {
    /// Label used in logs and serialized records.
    pub fn label(&self) -> &'static str {
        match self {
            Intent::RateMyTeam => "RMT",
            Intent::Transfer => "Transfer",
            Intent::Comparison => "Comparison",
            Intent::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Comments & Records
// ============================================================================

/// A raw fan comment. The author is carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub body: String,
}

impl Comment {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            author: None,
            body: body.into(),
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

/// Output unit of the pipeline: one per processed comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRecord {
    pub intent: Intent,
    pub extracted_names: Vec<String>,
    pub input_text: String,
    pub response_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl QueryRecord {
    pub fn intent(&self) -> Intent {
        self.intent
    }

    pub fn extracted_names(&self) -> &[String] {
        &self.extracted_names
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn response_text(&self) -> &str {
        &self.response_text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_labels() {
        assert_eq!(Intent::RateMyTeam.to_string(), "RMT");
        assert_eq!(Intent::Transfer.to_string(), "Transfer");
        assert_eq!(Intent::Comparison.to_string(), "Comparison");
        assert_eq!(Intent::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn test_intent_serializes_as_label() {
        let json = serde_json::to_string(&Intent::RateMyTeam).unwrap();
        assert_eq!(json, "\"RMT\"");
        let back: Intent = serde_json::from_str("\"Comparison\"").unwrap();
        assert_eq!(back, Intent::Comparison);
    }

    #[test]
    fn test_comment_author_is_optional() {
        let comment: Comment = serde_json::from_str(r#"{"body": "RMT please"}"#).unwrap();
        assert_eq!(comment.author, None);
        assert_eq!(comment.body, "RMT please");

        let comment = Comment::new("hi").with_author("someone");
        assert_eq!(comment.author.as_deref(), Some("someone"));
    }
}
