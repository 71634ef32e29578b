//! A drill over a fixed sequence of due cards.
//!
//! Traversal is cyclic: after the last card the session wraps back to the
//! first instead of terminating, so a deck can be drilled indefinitely. The
//! sequence is fixed when the session starts; an interleaved session shuffles
//! it once at that point and then keeps the shuffled order.

use super::{Card, SessionStats, scheduler};
use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;

pub struct StudySession {
    cards: Vec<Card>,
    position: usize,
    pub stats: SessionStats,
}

impl StudySession {
    /// Session over the given cards in their given order.
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards,
            position: 0,
            stats: SessionStats::default(),
        }
    }

    /// Session with the card order shuffled once up front (interleaved
    /// practice). The order stays fixed for the rest of the session.
    pub fn new_interleaved(mut cards: Vec<Card>) -> Self {
        cards.shuffle(&mut rand::thread_rng());
        Self::new(cards)
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.cards.get(self.position)
    }

    /// Moves to the next card, wrapping to the first after the last.
    pub fn advance(&mut self) {
        if !self.cards.is_empty() {
            self.position = (self.position + 1) % self.cards.len();
        }
    }

    /// Reviews the current card and advances. Returns the updated card so
    /// the caller can write it back to its store.
    pub fn record_review(&mut self, correct: bool, now: DateTime<Utc>) -> Option<Card> {
        let card = self.cards.get(self.position)?;
        let updated = scheduler::record_review(card, correct, now);
        self.cards[self.position] = updated.clone();
        self.stats.record(correct);
        self.advance();
        Some(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn three_cards() -> Vec<Card> {
        vec![
            Card::new(1, "q1", "a1", "dbms", Difficulty::Easy),
            Card::new(2, "q2", "a2", "dbms", Difficulty::Medium),
            Card::new(3, "q3", "a3", "dbms", Difficulty::Hard),
        ]
    }

    #[test]
    fn test_traversal_wraps_to_first_card() {
        let mut session = StudySession::new(three_cards());

        assert_eq!(session.current_card().unwrap().id, 1);
        session.advance();
        session.advance();
        assert_eq!(session.current_card().unwrap().id, 3);

        // Past the last card the drill starts over.
        session.advance();
        assert_eq!(session.current_card().unwrap().id, 1);
    }

    #[test]
    fn test_record_review_advances_and_accumulates_stats() {
        let now = fixed_now();
        let mut session = StudySession::new(three_cards());

        let updated = session.record_review(true, now).unwrap();
        assert_eq!(updated.id, 1);
        assert_eq!(updated.streak, 1);
        assert_eq!(session.current_card().unwrap().id, 2);

        session.record_review(false, now);
        session.record_review(true, now);

        assert_eq!(session.stats.total, 3);
        assert_eq!(session.stats.correct, 2);
        assert_eq!(session.stats.streak, 1);
    }

    #[test]
    fn test_wrapped_card_keeps_its_review_history() {
        let now = fixed_now();
        let mut session = StudySession::new(three_cards());

        // One full lap, then review card 1 again.
        session.record_review(true, now);
        session.record_review(true, now);
        session.record_review(true, now);
        let second_pass = session.record_review(true, now).unwrap();

        assert_eq!(second_pass.id, 1);
        assert_eq!(second_pass.streak, 2);
        assert_eq!(second_pass.total_reviews, 2);
    }

    #[test]
    fn test_empty_session_is_inert() {
        let mut session = StudySession::new(Vec::new());
        assert!(session.is_empty());
        assert!(session.current_card().is_none());
        session.advance();
        assert!(session.record_review(true, fixed_now()).is_none());
        assert_eq!(session.stats.total, 0);
    }

    #[test]
    fn test_interleaved_session_keeps_all_cards() {
        let session = StudySession::new_interleaved(three_cards());
        assert_eq!(session.len(), 3);
        let mut ids: Vec<i64> = session.cards.iter().map(|c| c.id).collect();
        ids.sort();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
