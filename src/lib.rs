pub mod export;
pub mod models;
pub mod store;
pub mod tutor;

pub use models::{
    Card, Difficulty, DifficultyLevel, KnowledgeEntry, QuizQuestion, QuizSession, QuizStatus,
    ReviewOutcome, SessionStats, StudySession,
};
pub use store::{CardStore, StoreError};
pub use tutor::{
    ConversationContext, GeneratedCard, KnowledgeBase, MatchPolicy, ResponseMode, TutorEngine,
    TutorResponse, generate_cards,
};
