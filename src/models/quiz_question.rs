//! A multiple-choice quiz question. Immutable for the lifetime of a session.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: i64,
    pub prompt: String,
    /// Exactly four answer options.
    pub options: [String; 4],
    pub correct_index: usize,
    pub explanation: String,
}

impl QuizQuestion {
    pub fn new(id: i64, prompt: &str, options: [&str; 4], correct_index: usize, explanation: &str) -> Self {
        Self {
            id,
            prompt: prompt.to_string(),
            options: options.map(|o| o.to_string()),
            correct_index,
            explanation: explanation.to_string(),
        }
    }
}
