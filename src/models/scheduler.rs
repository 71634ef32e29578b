//! Simplified spaced-repetition scheduling.
//!
//! The review interval is chosen by a three-tier rule on the streak the card
//! had *before* the review being recorded:
//! - streak 0: 1 day
//! - streak 1: 6 days
//! - streak >= 2: floor(streak * 2.5) days
//!
//! The resulting tier sequence for a fresh card is 1, 6, 5, 7, 10, ... —
//! the dip after the second correct review is part of the rule, not a bug.
//! An incorrect review resets the streak and schedules the card for tomorrow.

use super::Card;
use chrono::{DateTime, Duration, Utc};

/// Interval in days for a card reviewed correctly with the given pre-review
/// streak.
pub fn review_interval_days(streak: u32) -> i64 {
    match streak {
        0 => 1,
        1 => 6,
        s => (s as f64 * 2.5).floor() as i64,
    }
}

/// True when a card is eligible for review: never scheduled, or its
/// scheduled date has passed.
pub fn is_due(card: &Card, now: DateTime<Utc>) -> bool {
    match card.next_review {
        None => true,
        Some(next) => next <= now,
    }
}

/// All cards eligible for review at `now`, in input order. Callers filter
/// further by subject when studying a single deck.
pub fn due_cards(cards: &[Card], now: DateTime<Utc>) -> Vec<Card> {
    cards
        .iter()
        .filter(|card| is_due(card, now))
        .cloned()
        .collect()
}

/// Applies a review to a card, returning the updated card.
/// The caller's clock is `now`; nothing here reads the wall clock.
pub fn record_review(card: &Card, correct: bool, now: DateTime<Utc>) -> Card {
    let mut updated = card.clone();

    let interval_days = if correct {
        let interval = review_interval_days(card.streak);
        updated.streak = card.streak + 1;
        updated.correct_count = card.correct_count + 1;
        interval
    } else {
        updated.streak = 0;
        1
    };

    updated.total_reviews = card.total_reviews + 1;
    updated.last_reviewed = Some(now);
    updated.next_review = Some(now + Duration::days(interval_days));

    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn fresh_card() -> Card {
        Card::new(1, "What is normalization?", "Organizing data to reduce redundancy", "dbms", Difficulty::Medium)
    }

    #[test]
    fn test_interval_tiers() {
        assert_eq!(review_interval_days(0), 1);
        assert_eq!(review_interval_days(1), 6);
        assert_eq!(review_interval_days(2), 5);
        assert_eq!(review_interval_days(3), 7);
        assert_eq!(review_interval_days(4), 10);
    }

    #[test]
    fn test_three_correct_reviews_give_1_6_5() {
        let now = fixed_now();
        let card = fresh_card();

        let after_first = record_review(&card, true, now);
        assert_eq!(after_first.next_review, Some(now + Duration::days(1)));
        assert_eq!(after_first.streak, 1);

        let after_second = record_review(&after_first, true, now);
        assert_eq!(after_second.next_review, Some(now + Duration::days(6)));
        assert_eq!(after_second.streak, 2);

        // floor(2 * 2.5) = 5: shorter than the previous interval, intentional.
        let after_third = record_review(&after_second, true, now);
        assert_eq!(after_third.next_review, Some(now + Duration::days(5)));
        assert_eq!(after_third.streak, 3);
    }

    #[test]
    fn test_correct_review_updates_counts() {
        let now = fixed_now();
        let updated = record_review(&fresh_card(), true, now);

        assert_eq!(updated.correct_count, 1);
        assert_eq!(updated.total_reviews, 1);
        assert_eq!(updated.last_reviewed, Some(now));
    }

    #[test]
    fn test_incorrect_review_resets_streak() {
        let now = fixed_now();
        let mut card = fresh_card();
        card.streak = 7;
        card.correct_count = 7;
        card.total_reviews = 7;

        let updated = record_review(&card, false, now);

        assert_eq!(updated.streak, 0);
        assert_eq!(updated.correct_count, 7);
        assert_eq!(updated.total_reviews, 8);
        assert_eq!(updated.next_review, Some(now + Duration::days(1)));
    }

    #[test]
    fn test_counts_stay_consistent_over_mixed_run() {
        let now = fixed_now();
        let mut card = fresh_card();
        for correct in [true, true, false, true, false, true, true] {
            card = record_review(&card, correct, now);
            assert!(card.correct_count <= card.total_reviews);
        }
        assert_eq!(card.total_reviews, 7);
        assert_eq!(card.correct_count, 5);
        assert_eq!(card.streak, 2);
    }

    #[test]
    fn test_due_cards_includes_every_unscheduled_card() {
        let now = fixed_now();
        let cards = vec![
            fresh_card(),
            Card::new(2, "q2", "a2", "os", Difficulty::Easy),
            Card::new(3, "q3", "a3", "networking", Difficulty::Hard),
        ];

        let due = due_cards(&cards, now);
        assert_eq!(due.len(), 3);
    }

    #[test]
    fn test_due_cards_respects_scheduled_date() {
        let now = fixed_now();

        let mut scheduled_future = fresh_card();
        scheduled_future.id = 2;
        scheduled_future.next_review = Some(now + Duration::days(3));

        let mut scheduled_past = fresh_card();
        scheduled_past.id = 3;
        scheduled_past.next_review = Some(now - Duration::days(3));

        let mut scheduled_exact = fresh_card();
        scheduled_exact.id = 4;
        scheduled_exact.next_review = Some(now);

        let cards = vec![fresh_card(), scheduled_future, scheduled_past, scheduled_exact];
        let due = due_cards(&cards, now);

        let ids: Vec<i64> = due.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_consecutive_correct_next_reviews_never_move_backwards() {
        let mut now = fixed_now();
        let mut card = fresh_card();
        let mut previous = now;

        for _ in 0..6 {
            card = record_review(&card, true, now);
            let next = card.next_review.unwrap();
            assert!(next >= previous);
            previous = next;
            // Review again the day the card comes due.
            now = next;
        }
    }
}
