//! Specialist agents
//!
//! - [`AnalysisAgent`]: decides whether to search the web, then writes a report
//! - [`CodeAgent`]: writes code with a brief explanation

mod analysis;
mod code;

pub use analysis::AnalysisAgent;
pub use code::CodeAgent;
