//! Interactive chat module
//!
//! Provides a line-based interactive interface over the orchestrator.

mod repl;

pub use repl::ChatRepl;
