//! Conversation transcript port
//!
//! The orchestrator reports each milestone of a run (request received,
//! refinement, plan, per-specialist outcome, synthesis) as a
//! [`ConversationEvent`]. Diagnostics still go through `tracing`; this
//! port is only for the machine-readable transcript.

use serde_json::Value;

/// One transcript entry: a fixed event name plus free-form JSON fields
#[derive(Debug, Clone)]
pub struct ConversationEvent {
    /// e.g. `"plan_decided"`, `"agent_exhausted"`
    pub event_type: &'static str,
    pub payload: Value,
}

impl ConversationEvent {
    /// Timestamps are added by the logger, not here.
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Sink for transcript entries.
///
/// `log` cannot fail: an adapter that loses a write reports it through
/// `tracing` and carries on, so a broken transcript never changes an answer.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// Discards every event
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
