//! Flashcard with its per-card review statistics. A card whose `next_review`
//! is unset has never been scheduled and is always due.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Card difficulty as authored, independent of the reader's skill level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub subject: String,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    pub correct_count: u32,
    pub total_reviews: u32,
    /// Consecutive correct reviews. Reset to 0 by an incorrect review.
    pub streak: u32,
    pub last_reviewed: Option<DateTime<Utc>>,
    pub next_review: Option<DateTime<Utc>>,
}

impl Card {
    /// A fresh, never-reviewed card.
    pub fn new(id: i64, question: &str, answer: &str, subject: &str, difficulty: Difficulty) -> Self {
        Self {
            id,
            question: question.to_string(),
            answer: answer.to_string(),
            subject: subject.to_string(),
            difficulty,
            tags: Vec::new(),
            correct_count: 0,
            total_reviews: 0,
            streak: 0,
            last_reviewed: None,
            next_review: None,
        }
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Fraction of reviews answered correctly, or 0.0 for an unreviewed card.
    pub fn accuracy(&self) -> f64 {
        if self.total_reviews == 0 {
            0.0
        } else {
            self.correct_count as f64 / self.total_reviews as f64
        }
    }
}

/// One review event, consumed by the scheduler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewOutcome {
    pub card_id: i64,
    pub correct: bool,
    pub timestamp: DateTime<Utc>,
}
