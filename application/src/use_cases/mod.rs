//! Use cases
//!
//! - [`run_orchestration`]: the refine / plan / delegate / synthesize pipeline
//! - [`validate_and_iterate`]: the bounded retry-and-improve engine
//! - [`specialists`]: the Analysis and Code agents

pub mod run_orchestration;
pub(crate) mod shared;
pub mod specialists;
pub mod validate_and_iterate;
