//! Query dispatch for the tutoring chat.
//!
//! Dispatch is a deterministic keyword lookup, not inference: the normalized
//! query is scanned against the subject's topic keys, the matching entry is
//! adapted to the reader (difficulty substitution, simplified override) and
//! assembled for the requested verbosity mode. Unmatched queries get a
//! synthesized fallback with a fixed low confidence.

use super::context::{ConversationContext, ResponseMode};
use super::knowledge_base::KnowledgeBase;
use crate::models::{DifficultyLevel, KnowledgeEntry};

/// Confidence attached to every fallback response.
pub const DEFAULT_CONFIDENCE: f64 = 0.5;

const BEGINNER_HINTS: [&str; 3] = ["beginner", "simple", "easy"];
const ADVANCED_HINTS: [&str; 3] = ["advanced", "expert", "complex"];
const SIMPLIFIED_TRIGGERS: [&str; 3] = ["explain like i'm 5", "eli5", "simple terms"];

/// How overlapping topic keys are resolved.
///
/// `FirstMatch` reproduces the historical behavior: the first entry in table
/// order whose key occurs in the query wins, so "transaction management"
/// can lose to a "transaction" entry registered earlier. `LongestMatch`
/// prefers the most specific key instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    #[default]
    FirstMatch,
    LongestMatch,
}

/// Rendered answer returned to the view layer. The optional enrichment
/// fields are populated only for extended-mode responses.
#[derive(Debug, Clone)]
pub struct TutorResponse {
    pub message: String,
    pub confidence: f64,
    pub sources: Vec<String>,
    pub code_snippet: Option<String>,
    pub diagram: Option<String>,
    pub hints: Option<Vec<String>>,
    pub follow_up_questions: Option<Vec<String>>,
    pub difficulty: DifficultyLevel,
    pub simplified: bool,
}

pub struct TutorEngine {
    knowledge: KnowledgeBase,
    context: ConversationContext,
    match_policy: MatchPolicy,
}

impl TutorEngine {
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self::with_match_policy(knowledge, MatchPolicy::default())
    }

    pub fn with_match_policy(knowledge: KnowledgeBase, match_policy: MatchPolicy) -> Self {
        Self {
            knowledge,
            context: ConversationContext::new("", DifficultyLevel::Intermediate, ResponseMode::Core),
            match_policy,
        }
    }

    pub fn context(&self) -> &ConversationContext {
        &self.context
    }

    /// Resolves a query into a response and updates the conversation
    /// context. Total over all inputs: an unmatched query yields the
    /// fallback response, never an error.
    pub fn resolve_query(
        &mut self,
        query: &str,
        subject: &str,
        extended_mode: bool,
        difficulty: DifficultyLevel,
        want_simplified: bool,
    ) -> TutorResponse {
        let normalized = query.to_lowercase();

        let effective_difficulty = if contains_any(&normalized, &BEGINNER_HINTS) {
            DifficultyLevel::Beginner
        } else if contains_any(&normalized, &ADVANCED_HINTS) {
            DifficultyLevel::Advanced
        } else {
            difficulty
        };

        let wants_simplified = want_simplified || contains_any(&normalized, &SIMPLIFIED_TRIGGERS);

        self.context.subject = subject.to_string();
        self.context.difficulty = effective_difficulty;
        self.context.mode = if extended_mode { ResponseMode::Extended } else { ResponseMode::Core };
        self.context.last_question = Some(query.to_string());

        let entry = self.find_entry(subject, &normalized);

        match entry {
            Some(entry) => {
                log::debug!("tutor matched '{}' in subject '{}'", entry.topic_key, subject);
                let topic_key = entry.topic_key.clone();
                let response = build_matched_response(
                    entry,
                    effective_difficulty,
                    wants_simplified,
                    extended_mode,
                );
                self.context.push_topic(&topic_key);
                response
            }
            None => {
                log::debug!("no topic match in subject '{}'", subject);
                self.build_fallback_response(subject, effective_difficulty, extended_mode)
            }
        }
    }

    fn find_entry(&self, subject: &str, normalized: &str) -> Option<&KnowledgeEntry> {
        let entries = self.knowledge.entries_for(subject);
        match self.match_policy {
            MatchPolicy::FirstMatch => entries.iter().find(|e| normalized.contains(&e.topic_key)),
            MatchPolicy::LongestMatch => entries
                .iter()
                .filter(|e| normalized.contains(&e.topic_key))
                .max_by_key(|e| e.topic_key.len()),
        }
    }

    fn build_fallback_response(
        &self,
        subject: &str,
        difficulty: DifficultyLevel,
        extended_mode: bool,
    ) -> TutorResponse {
        let message = if extended_mode {
            let mut message = String::from("I couldn't match that question to a topic I know well.");
            let topics: Vec<&str> = self.context.previous_topics().collect();
            if !topics.is_empty() {
                message.push_str(&format!(
                    " Based on our previous discussion about {}, revisiting those areas might help frame it.",
                    topics.join(", ")
                ));
            }
            message.push(' ');
            message.push_str(match difficulty {
                DifficultyLevel::Beginner => {
                    "Start with the fundamentals and build up one concept at a time."
                }
                DifficultyLevel::Intermediate => {
                    "Try relating the question to a concept you already know from this subject."
                }
                DifficultyLevel::Advanced => {
                    "For authoritative detail, the primary literature on this subject is the best next stop."
                }
            });
            message
        } else {
            format!(
                "I don't have a good answer for that yet. Could you rephrase it, or ask about a specific {subject} topic?"
            )
        };

        TutorResponse {
            message,
            confidence: DEFAULT_CONFIDENCE,
            sources: Vec::new(),
            code_snippet: None,
            diagram: None,
            hints: if extended_mode { Some(Vec::new()) } else { None },
            follow_up_questions: if extended_mode { Some(Vec::new()) } else { None },
            difficulty,
            simplified: false,
        }
    }
}

fn build_matched_response(
    entry: &KnowledgeEntry,
    difficulty: DifficultyLevel,
    wants_simplified: bool,
    extended_mode: bool,
) -> TutorResponse {
    let mut simplified = false;
    let mut message = entry.message.clone();

    // Difficulty substitution: adapt the entry to the reader.
    if difficulty == DifficultyLevel::Beginner && entry.difficulty_tag == DifficultyLevel::Advanced {
        if let Some(simple) = &entry.simplified_message {
            message = simple.clone();
            simplified = true;
        }
    } else if difficulty == DifficultyLevel::Advanced
        && entry.difficulty_tag == DifficultyLevel::Beginner
    {
        message.push_str(&format!(
            "\n\nAdvanced Perspective: beyond the basics of {}, look at the edge cases and the trade-offs that appear at scale.",
            entry.topic_key
        ));
    }

    // An explicit request for simple terms overrides the tag logic.
    if wants_simplified {
        if let Some(simple) = &entry.simplified_message {
            message = simple.clone();
            simplified = true;
        }
    }

    if extended_mode {
        message = assemble_extended(&message, entry);
    } else if !simplified {
        // Core mode keeps the essentials; the simplified variant is already
        // written tight and is never truncated.
        message = first_two_sentences(&message);
    }

    TutorResponse {
        message,
        confidence: entry.confidence,
        sources: entry.sources.clone(),
        code_snippet: if extended_mode { entry.code_snippet.clone() } else { None },
        diagram: if extended_mode { entry.diagram.clone() } else { None },
        hints: if extended_mode { Some(entry.hints.clone()) } else { None },
        follow_up_questions: if extended_mode {
            Some(entry.follow_up_questions.clone())
        } else {
            None
        },
        difficulty,
        simplified,
    }
}

/// Appends the extended-learning sections in their fixed order.
fn assemble_extended(base: &str, entry: &KnowledgeEntry) -> String {
    let mut message = base.to_string();
    message.push_str("\n\n--- Extended Learning ---");

    if let Some(code) = &entry.code_snippet {
        message.push_str("\n\nCode example:\n");
        message.push_str(code);
    }
    if !entry.hints.is_empty() {
        message.push_str("\n\nHints:");
        for hint in &entry.hints {
            message.push_str(&format!("\n- {hint}"));
        }
    }
    if !entry.follow_up_questions.is_empty() {
        message.push_str("\n\nTo explore further:");
        for question in &entry.follow_up_questions {
            message.push_str(&format!("\n- {question}"));
        }
    }
    if !entry.videos.is_empty() {
        message.push_str("\n\nRecommended videos:");
        for video in &entry.videos {
            message.push_str(&format!("\n- {video}"));
        }
    }

    message.push_str(
        "\n\nStudy tip: space reviews out over several days and test yourself instead of rereading.",
    );
    message
}

/// First two sentences of a message, split on '.', trailing period restored.
fn first_two_sentences(text: &str) -> String {
    let mut sentences = text.split('.').filter(|s| !s.trim().is_empty());
    match (sentences.next(), sentences.next()) {
        (Some(first), Some(second)) => format!("{first}.{second}."),
        (Some(first), None) => format!("{first}."),
        _ => String::new(),
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
