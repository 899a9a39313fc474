//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: local models that back the planner and specialists
//! - [`request::Request`]: a validated user request
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod request;
