//! In-memory card store.
//!
//! The store is constructed explicitly and handed to whoever needs it —
//! there is no module-level global. Review recording validates that the
//! card exists before mutating anything; an unknown id is an error, never a
//! phantom card.

use crate::models::{Card, Difficulty, ReviewOutcome, scheduler};
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("Card not found: {0}")]
    CardNotFound(i64),

    #[error("Duplicate card id: {0}")]
    DuplicateCardId(i64),
}

pub type Result<T> = std::result::Result<T, StoreError>;

pub struct CardStore {
    cards: Vec<Card>,
}

impl CardStore {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// The builtin sample deck the platform ships for demos and tests.
    pub fn sample() -> Self {
        Self::new(sample_cards())
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, id: i64) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Adds a card, rejecting duplicate ids.
    pub fn add(&mut self, card: Card) -> Result<()> {
        if self.get(card.id).is_some() {
            return Err(StoreError::DuplicateCardId(card.id));
        }
        self.cards.push(card);
        Ok(())
    }

    /// Next free id for caller-constructed cards.
    pub fn next_id(&self) -> i64 {
        self.cards.iter().map(|card| card.id).max().unwrap_or(0) + 1
    }

    /// Cards due for review at `now`, across all subjects, in store order.
    pub fn due(&self, now: DateTime<Utc>) -> Vec<Card> {
        scheduler::due_cards(&self.cards, now)
    }

    /// Cards due for review at `now`, restricted to one subject.
    pub fn due_for_subject(&self, subject: &str, now: DateTime<Utc>) -> Vec<Card> {
        self.due(now)
            .into_iter()
            .filter(|card| card.subject == subject)
            .collect()
    }

    /// Applies a review outcome to the stored card and returns the updated
    /// card. The store is untouched when the id is unknown.
    pub fn record_review(&mut self, card_id: i64, correct: bool, now: DateTime<Utc>) -> Result<Card> {
        let card = self
            .cards
            .iter_mut()
            .find(|card| card.id == card_id)
            .ok_or(StoreError::CardNotFound(card_id))?;

        let updated = scheduler::record_review(card, correct, now);
        log::debug!(
            "card {} reviewed ({}), next review {:?}",
            card_id,
            if correct { "correct" } else { "incorrect" },
            updated.next_review
        );
        *card = updated.clone();
        Ok(updated)
    }

    /// Convenience wrapper over [`record_review`](Self::record_review) for a
    /// transient outcome value.
    pub fn apply_outcome(&mut self, outcome: &ReviewOutcome) -> Result<Card> {
        self.record_review(outcome.card_id, outcome.correct, outcome.timestamp)
    }
}

/// Static sample deck across the default subjects, with varied review
/// statistics so due filtering and accuracy displays have something to show.
fn sample_cards() -> Vec<Card> {
    let mut cards = vec![
        Card::new(
            1,
            "What is database normalization?",
            "Organizing tables to reduce redundancy and update anomalies",
            "dbms",
            Difficulty::Medium,
        )
        .with_tags(&["design", "normal-forms"]),
        Card::new(
            2,
            "What does ACID stand for?",
            "Atomicity, Consistency, Isolation, Durability",
            "dbms",
            Difficulty::Easy,
        )
        .with_tags(&["transactions"]),
        Card::new(
            3,
            "When does a covering index avoid a table lookup?",
            "When the index contains every column the query reads",
            "dbms",
            Difficulty::Hard,
        )
        .with_tags(&["indexing", "performance"]),
        Card::new(
            4,
            "What is a context switch?",
            "Saving one process's CPU state and restoring another's",
            "os",
            Difficulty::Medium,
        )
        .with_tags(&["scheduling"]),
        Card::new(
            5,
            "Name the four conditions for deadlock.",
            "Mutual exclusion, hold and wait, no preemption, circular wait",
            "os",
            Difficulty::Hard,
        )
        .with_tags(&["concurrency"]),
        Card::new(
            6,
            "What does TCP add over IP?",
            "Reliable, ordered, connection-oriented byte streams",
            "networking",
            Difficulty::Easy,
        )
        .with_tags(&["transport"]),
        Card::new(
            7,
            "What does DNS resolve?",
            "Human-readable names to IP addresses",
            "networking",
            Difficulty::Easy,
        ),
        Card::new(
            8,
            "What is the time complexity of binary search?",
            "O(log n) on a sorted sequence",
            "algorithms",
            Difficulty::Easy,
        )
        .with_tags(&["search", "complexity"]),
    ];

    // A couple of cards carry history so the deck is not uniformly fresh.
    cards[1].correct_count = 3;
    cards[1].total_reviews = 4;
    cards[1].streak = 2;
    cards[5].correct_count = 1;
    cards[5].total_reviews = 3;
    cards[5].streak = 0;

    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_sample_deck_invariants() {
        let store = CardStore::sample();
        assert!(!store.is_empty());
        for card in store.cards() {
            assert!(card.correct_count <= card.total_reviews);
            assert!(!card.question.is_empty());
            assert!(!card.answer.is_empty());
        }
    }

    #[test]
    fn test_unscheduled_sample_cards_are_all_due() {
        let store = CardStore::sample();
        // No sample card has a scheduled date, so every card is due.
        assert_eq!(store.due(fixed_now()).len(), store.len());
    }

    #[test]
    fn test_due_for_subject_filters() {
        let store = CardStore::sample();
        let due = store.due_for_subject("dbms", fixed_now());
        assert!(!due.is_empty());
        assert!(due.iter().all(|card| card.subject == "dbms"));
    }

    #[test]
    fn test_record_review_updates_stored_card() {
        let now = fixed_now();
        let mut store = CardStore::sample();

        let updated = store.record_review(1, true, now).unwrap();
        assert_eq!(updated.total_reviews, 1);

        let stored = store.get(1).unwrap();
        assert_eq!(stored.total_reviews, 1);
        assert_eq!(stored.next_review, Some(now + Duration::days(1)));
    }

    #[test]
    fn test_reviewed_card_leaves_the_due_set() {
        let now = fixed_now();
        let mut store = CardStore::sample();
        let due_before = store.due(now).len();

        store.record_review(1, true, now).unwrap();

        assert_eq!(store.due(now).len(), due_before - 1);
        // The card comes due again once its interval elapses.
        assert_eq!(store.due(now + Duration::days(1)).len(), due_before);
    }

    #[test]
    fn test_unknown_card_is_rejected_without_mutation() {
        let mut store = CardStore::sample();
        let len_before = store.len();

        let result = store.record_review(999, true, fixed_now());

        assert_eq!(result, Err(StoreError::CardNotFound(999)));
        assert_eq!(store.len(), len_before);
        assert!(store.get(999).is_none());
    }

    #[test]
    fn test_apply_outcome_round_trips() {
        let mut store = CardStore::sample();
        let outcome = ReviewOutcome {
            card_id: 2,
            correct: false,
            timestamp: fixed_now(),
        };

        let updated = store.apply_outcome(&outcome).unwrap();
        assert_eq!(updated.streak, 0);
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut store = CardStore::empty();
        store.add(Card::new(1, "q", "a", "dbms", Difficulty::Easy)).unwrap();

        let result = store.add(Card::new(1, "q2", "a2", "dbms", Difficulty::Easy));
        assert_eq!(result, Err(StoreError::DuplicateCardId(1)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_next_id() {
        let store = CardStore::sample();
        assert_eq!(store.next_id(), 9);
        assert_eq!(CardStore::empty().next_id(), 1);
    }
}
