//! Application layer for agent-conductor
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ExecutionParams, KeywordConfig};
pub use ports::{
    completion::{CompletionBackend, CompletionError},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    progress::{NoProgress, ProgressNotifier},
    search::{MAX_SEARCH_HITS, SearchBackend, SearchError, SearchHit, SearchOutcome},
    specialist::{AgentError, SpecialistAgent},
};
pub use use_cases::run_orchestration::{Orchestrator, PlanAttemptError, PlanningFailure};
pub use use_cases::specialists::{AnalysisAgent, CodeAgent};
pub use use_cases::validate_and_iterate::{
    AgentProducer, CompletionImprover, InputImprover, IterationOutcome, Producer, ProducerError,
    validate_and_iterate,
};
