//! Orchestration subdomain: how a request is planned, delegated and
//! synthesized.
//!
//! - [`intent`]: the closed [`Intent`](intent::Intent) classification, the
//!   [`Specialist`](intent::Specialist) roster and the [`Plan`](intent::Plan)
//! - [`plan_parser`]: strict decoding of a planner response into a Plan
//! - [`research`]: the Analysis agent's search-or-analyze decision
//! - [`value_objects`]: per-run results and the final answer
//! - [`entities`]: pipeline phases

pub mod entities;
pub mod intent;
pub mod plan_parser;
pub mod research;
pub mod value_objects;
