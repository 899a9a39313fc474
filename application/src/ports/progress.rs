//! Progress notification port
//!
//! Defines the interface for reporting progress while a request is orchestrated.

use conductor_domain::{Phase, Plan, Specialist};

/// Callback for progress updates during orchestration
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinners, plain lines, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called when a phase starts
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize);

    /// Called when a phase completes
    fn on_phase_complete(&self, phase: &Phase);

    /// Called once the planner has decided
    fn on_plan(&self, _plan: &Plan) {}

    /// Called when a specialist's loop has finished
    fn on_specialist_complete(&self, _specialist: Specialist, _success: bool, _attempts: u32) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_phase_start(&self, _phase: &Phase, _total_tasks: usize) {}
    fn on_phase_complete(&self, _phase: &Phase) {}
}
