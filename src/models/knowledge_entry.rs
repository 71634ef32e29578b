//! Canned knowledge records backing the tutoring chat.
//!
//! Entries are pure data: a topic key matched against incoming queries, the
//! answer text, a fixed confidence scalar, and optional enrichments that the
//! extended response mode surfaces.

use serde::{Deserialize, Serialize};

/// Reader skill level, used both as an entry tag and as the active
/// difficulty of a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub subject: String,
    /// Substring matched against the normalized query.
    pub topic_key: String,
    pub message: String,
    /// Fixed scalar in [0, 1]; not a computed probability.
    pub confidence: f64,
    pub sources: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub videos: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_snippet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagram: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub hints: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub follow_up_questions: Vec<String>,
    pub difficulty_tag: DifficultyLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simplified_message: Option<String>,
}

impl KnowledgeEntry {
    pub fn new(subject: &str, topic_key: &str, message: &str, confidence: f64, difficulty_tag: DifficultyLevel) -> Self {
        Self {
            subject: subject.to_string(),
            topic_key: topic_key.to_string(),
            message: message.to_string(),
            confidence,
            sources: Vec::new(),
            videos: Vec::new(),
            code_snippet: None,
            diagram: None,
            hints: Vec::new(),
            follow_up_questions: Vec::new(),
            difficulty_tag,
            simplified_message: None,
        }
    }

    pub fn with_sources(mut self, sources: &[&str]) -> Self {
        self.sources = sources.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_videos(mut self, videos: &[&str]) -> Self {
        self.videos = videos.iter().map(|v| v.to_string()).collect();
        self
    }

    pub fn with_code_snippet(mut self, code: &str) -> Self {
        self.code_snippet = Some(code.to_string());
        self
    }

    pub fn with_diagram(mut self, diagram: &str) -> Self {
        self.diagram = Some(diagram.to_string());
        self
    }

    pub fn with_hints(mut self, hints: &[&str]) -> Self {
        self.hints = hints.iter().map(|h| h.to_string()).collect();
        self
    }

    pub fn with_follow_ups(mut self, questions: &[&str]) -> Self {
        self.follow_up_questions = questions.iter().map(|q| q.to_string()).collect();
        self
    }

    pub fn with_simplified(mut self, simplified: &str) -> Self {
        self.simplified_message = Some(simplified.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_fills_optional_fields() {
        let entry = KnowledgeEntry::new("dbms", "indexing", "Indexes speed up lookups.", 0.9, DifficultyLevel::Intermediate)
            .with_sources(&["Database System Concepts"])
            .with_hints(&["Think of a book index"])
            .with_simplified("An index is like a book's table of contents.");

        assert_eq!(entry.sources.len(), 1);
        assert_eq!(entry.hints.len(), 1);
        assert!(entry.simplified_message.is_some());
        assert!(entry.code_snippet.is_none());
    }
}
