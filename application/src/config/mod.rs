//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`ExecutionParams`]: attempt limits, refinement toggle, call timeout
//! - [`KeywordConfig`]: expected keywords for each validated producer

pub mod execution_params;
pub mod keyword_config;

pub use execution_params::ExecutionParams;
pub use keyword_config::KeywordConfig;
