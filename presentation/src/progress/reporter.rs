//! Progress reporting for orchestration runs
//!
//! Both reporters write to stderr so stdout carries only the answer.

use colored::Colorize;
use conductor_application::ProgressNotifier;
use conductor_domain::{Phase, Plan, Specialist};
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with one spinner per phase
pub struct ProgressReporter {
    multi: MultiProgress,
    phase_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::with_draw_target(ProgressDrawTarget::stderr()),
            phase_bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn specialist_status(specialist: Specialist, success: bool, attempts: u32) -> String {
        if success {
            format!(
                "{} {} ({} attempt{})",
                "v".green(),
                specialist.display_name(),
                attempts,
                if attempts == 1 { "" } else { "s" }
            )
        } else {
            format!(
                "{} {} (unvalidated after {})",
                "x".red(),
                specialist.display_name(),
                attempts
            )
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
        let pb = self.multi.add(ProgressBar::new_spinner());
        pb.set_style(Self::spinner_style());
        pb.set_prefix(phase.display_name().to_string());
        if total_tasks > 1 {
            pb.set_message(format!("{} tasks", total_tasks));
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.phase_bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_plan(&self, plan: &Plan) {
        self.multi
            .println(format!("  {} {}", "Intent:".bold(), plan.intent))
            .ok();
    }

    fn on_specialist_complete(&self, specialist: Specialist, success: bool, attempts: u32) {
        if let Ok(slot) = self.phase_bar.lock()
            && let Some(pb) = slot.as_ref()
        {
            pb.println(format!(
                "  {}",
                Self::specialist_status(specialist, success, attempts)
            ));
        }
    }

    fn on_phase_complete(&self, _phase: &Phase) {
        if let Ok(mut slot) = self.phase_bar.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_with_message(format!("{}", "done".green()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
        if total_tasks > 1 {
            eprintln!(
                "{} {} ({} tasks)",
                "->".cyan(),
                phase.display_name().bold(),
                total_tasks
            );
        } else {
            eprintln!("{} {}", "->".cyan(), phase.display_name().bold());
        }
    }

    fn on_plan(&self, plan: &Plan) {
        eprintln!("  {} {}", "Intent:".bold(), plan.intent);
    }

    fn on_specialist_complete(&self, specialist: Specialist, success: bool, attempts: u32) {
        eprintln!(
            "  {}",
            ProgressReporter::specialist_status(specialist, success, attempts)
        );
    }

    fn on_phase_complete(&self, _phase: &Phase) {}
}
