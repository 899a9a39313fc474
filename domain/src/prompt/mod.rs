//! Prompt templates.
//!
//! - [`template::PromptTemplate`]: orchestrator prompts (refine, plan, improve, synthesize)
//! - [`agent::AgentPromptTemplate`]: specialist agent prompts

pub mod agent;
pub mod template;

pub use agent::AgentPromptTemplate;
pub use template::PromptTemplate;
