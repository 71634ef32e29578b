pub mod context;
pub mod engine;
pub mod generator;
pub mod knowledge_base;

pub use context::{ConversationContext, ResponseMode};
pub use engine::{MatchPolicy, TutorEngine, TutorResponse};
pub use generator::{GeneratedCard, generate_cards};
pub use knowledge_base::KnowledgeBase;
