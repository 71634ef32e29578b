//! Timed quiz session state machine.
//!
//! States move strictly forward: NotStarted -> InProgress -> Submitted.
//! Submitted is terminal. Mutating calls outside InProgress are silent
//! no-ops; the session never enters an invalid state and never panics on
//! out-of-range input.
//!
//! The countdown is driven externally: the owning view calls `tick()` once
//! per second while the session is in progress and stops calling it after
//! submission or teardown.

use super::{QuizQuestion, SessionStats};

/// Default time budget for a quiz run, in seconds.
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 1200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum QuizStatus {
    NotStarted,
    InProgress,
    Submitted,
}

pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    status: QuizStatus,
    current_index: usize,
    selected_answers: Vec<Option<usize>>,
    seconds_remaining: u32,
    time_limit_secs: u32,
}

impl QuizSession {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self::with_time_limit(questions, DEFAULT_TIME_LIMIT_SECS)
    }

    pub fn with_time_limit(questions: Vec<QuizQuestion>, time_limit_secs: u32) -> Self {
        let answer_slots = questions.len();
        Self {
            questions,
            status: QuizStatus::NotStarted,
            current_index: 0,
            selected_answers: vec![None; answer_slots],
            seconds_remaining: 0,
            time_limit_secs,
        }
    }

    pub fn status(&self) -> QuizStatus {
        self.status
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current_index)
    }

    pub fn selected_answer(&self, question_index: usize) -> Option<usize> {
        self.selected_answers.get(question_index).copied().flatten()
    }

    /// NotStarted -> InProgress. Resets the countdown and navigation.
    pub fn start(&mut self) {
        if self.status != QuizStatus::NotStarted {
            return;
        }
        self.status = QuizStatus::InProgress;
        self.seconds_remaining = self.time_limit_secs;
        self.current_index = 0;
    }

    /// One second of countdown. Reaching zero submits the quiz.
    pub fn tick(&mut self) {
        if self.status != QuizStatus::InProgress {
            return;
        }
        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining == 0 {
            log::debug!("quiz timed out, auto-submitting");
            self.status = QuizStatus::Submitted;
        }
    }

    /// Records or overwrites the answer for a question. Out-of-range
    /// question or option indices are ignored.
    pub fn select_answer(&mut self, question_index: usize, option_index: usize) {
        if self.status != QuizStatus::InProgress {
            return;
        }
        if question_index >= self.questions.len() {
            return;
        }
        if option_index >= self.questions[question_index].options.len() {
            return;
        }
        self.selected_answers[question_index] = Some(option_index);
    }

    pub fn go_to(&mut self, index: usize) {
        if self.status != QuizStatus::InProgress {
            return;
        }
        if index < self.questions.len() {
            self.current_index = index;
        }
    }

    pub fn next(&mut self) {
        if self.status != QuizStatus::InProgress {
            return;
        }
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
        }
    }

    pub fn previous(&mut self) {
        if self.status != QuizStatus::InProgress {
            return;
        }
        self.current_index = self.current_index.saturating_sub(1);
    }

    /// Manual early submission. Freezes all further mutation.
    pub fn submit(&mut self) {
        if self.status != QuizStatus::InProgress {
            return;
        }
        log::debug!(
            "quiz submitted with {}/{} questions answered",
            self.answered_count(),
            self.questions.len()
        );
        self.status = QuizStatus::Submitted;
    }

    pub fn answered_count(&self) -> usize {
        self.selected_answers.iter().filter(|a| a.is_some()).count()
    }

    fn correct_count(&self) -> usize {
        self.questions
            .iter()
            .zip(&self.selected_answers)
            .filter(|(question, answer)| **answer == Some(question.correct_index))
            .count()
    }

    /// Percentage score, rounded. Defined only once the quiz is submitted;
    /// an unanswered question counts as incorrect.
    pub fn score(&self) -> Option<u32> {
        if self.status != QuizStatus::Submitted {
            return None;
        }
        if self.questions.is_empty() {
            return Some(0);
        }
        let ratio = self.correct_count() as f64 / self.questions.len() as f64;
        Some((100.0 * ratio).round() as u32)
    }

    /// Session statistics for the submitted run: answered-correct totals,
    /// with the streak taken over questions in order.
    pub fn result_stats(&self) -> Option<SessionStats> {
        if self.status != QuizStatus::Submitted {
            return None;
        }
        let mut stats = SessionStats::default();
        for (question, answer) in self.questions.iter().zip(&self.selected_answers) {
            stats.record(*answer == Some(question.correct_index));
        }
        Some(stats)
    }
}
