//! Run Orchestration use case
//!
//! Takes one user request through the full pipeline:
//!
//! | Phase          | Backend  | Retries                                   |
//! |----------------|----------|-------------------------------------------|
//! | 1. Refinement  | planner  | none; falls back to the original request  |
//! | 2. Planning    | planner  | same prompt, up to `plan_attempts`        |
//! | 3. Delegation  | agents   | validate-and-iterate per specialist       |
//! | 4. Synthesis   | planner  | validate-and-iterate                      |
//!
//! Every path ends in a [`FinalAnswer`]; failures never escape as errors.

mod delegation;
mod planning;
mod refine;
mod synthesis;
mod types;

pub use types::{PlanAttemptError, PlanningFailure};

use crate::config::{ExecutionParams, KeywordConfig};
use crate::ports::completion::CompletionBackend;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::specialist::SpecialistAgent;
use crate::use_cases::validate_and_iterate::{CompletionImprover, InputImprover};
use conductor_domain::{FinalAnswer, OrchestrationReport, Phase, Request, Specialist, SynthesisInput};
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{error, info, warn};
use types::events;

/// Use case coordinating the planner and the specialist agents
///
/// Constructed once per process; every request goes through
/// [`handle`](Self::handle).
pub struct Orchestrator {
    planner: Arc<dyn CompletionBackend>,
    analysis: Arc<dyn SpecialistAgent>,
    code: Arc<dyn SpecialistAgent>,
    improver: Option<Arc<dyn InputImprover>>,
    params: ExecutionParams,
    keywords: KeywordConfig,
    logger: Arc<dyn ConversationLogger>,
}

impl Orchestrator {
    pub fn new(
        planner: Arc<dyn CompletionBackend>,
        analysis: Arc<dyn SpecialistAgent>,
        code: Arc<dyn SpecialistAgent>,
    ) -> Self {
        Self {
            planner,
            analysis,
            code,
            improver: None,
            params: ExecutionParams::default(),
            keywords: KeywordConfig::default(),
            logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_params(mut self, params: ExecutionParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_keywords(mut self, keywords: KeywordConfig) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Replace the planner-backed input improver
    pub fn with_improver(mut self, improver: Arc<dyn InputImprover>) -> Self {
        self.improver = Some(improver);
        self
    }

    pub fn params(&self) -> &ExecutionParams {
        &self.params
    }

    /// Handle a request with default (no-op) progress
    pub async fn handle(&self, request: &str) -> OrchestrationReport {
        self.handle_with_progress(request, &NoProgress).await
    }

    /// Handle a request with progress callbacks
    ///
    /// A panic anywhere in the pipeline is logged and reported as
    /// [`FinalAnswer::Unexpected`].
    pub async fn handle_with_progress(
        &self,
        request: &str,
        progress: &dyn ProgressNotifier,
    ) -> OrchestrationReport {
        match AssertUnwindSafe(self.run_pipeline(request, progress))
            .catch_unwind()
            .await
        {
            Ok(report) => report,
            Err(payload) => {
                let detail = panic_detail(payload.as_ref());
                error!("Request processing panicked: {}", detail);
                OrchestrationReport::failed(request, FinalAnswer::Unexpected(detail))
            }
        }
    }

    async fn run_pipeline(
        &self,
        request: &str,
        progress: &dyn ProgressNotifier,
    ) -> OrchestrationReport {
        let request = match Request::new(request) {
            Ok(request) => request,
            Err(e) => {
                warn!("Rejected request: {}", e);
                return OrchestrationReport::failed(
                    request,
                    FinalAnswer::Unexpected(e.to_string()),
                );
            }
        };

        info!("Handling request ({} chars)", request.content().len());
        self.logger.log(ConversationEvent::new(
            events::REQUEST_RECEIVED,
            serde_json::json!({ "request": request.content() }),
        ));

        // Phase 1: Refinement
        let refined = if self.params.refine_input {
            progress.on_phase_start(&Phase::Refinement, 1);
            let refined = self.refine(request.content()).await;
            progress.on_phase_complete(&Phase::Refinement);
            self.logger.log(ConversationEvent::new(
                events::INPUT_REFINED,
                serde_json::json!({ "original": request.content(), "refined": refined }),
            ));
            Some(refined)
        } else {
            None
        };
        let working = refined.as_deref().unwrap_or(request.content());

        // Phase 2: Planning
        progress.on_phase_start(&Phase::Planning, 1);
        let plan = self.plan(working).await;
        progress.on_phase_complete(&Phase::Planning);

        let plan = match plan {
            Ok(plan) => plan,
            Err(failure) => {
                warn!("{}", failure);
                self.logger.log(ConversationEvent::new(
                    events::PLANNING_FAILED,
                    serde_json::json!({
                        "attempts": failure.attempts,
                        "error": failure.last_error.as_ref().map(|e| e.to_string()),
                    }),
                ));
                return OrchestrationReport {
                    request: request.into_content(),
                    refined_request: refined,
                    plan: None,
                    results: Vec::new(),
                    answer: FinalAnswer::PlanningFailed,
                };
            }
        };
        progress.on_plan(&plan);
        self.logger.log(ConversationEvent::new(
            events::PLAN_DECIDED,
            serde_json::json!({ "type": plan.intent.as_str(), "reason": plan.reason }),
        ));

        // Phase 3: Delegation
        let results = self.delegate(&plan, working, progress).await;

        // Phase 4: Synthesis
        progress.on_phase_start(&Phase::Synthesis, 1);
        let input = SynthesisInput::new(request.content(), refined.clone(), results);
        let answer = self.synthesize(&input).await;
        progress.on_phase_complete(&Phase::Synthesis);

        OrchestrationReport {
            request: input.original,
            refined_request: refined,
            plan: Some(plan),
            results: input.results,
            answer,
        }
    }

    fn specialist(&self, specialist: Specialist) -> Arc<dyn SpecialistAgent> {
        match specialist {
            Specialist::Analysis => Arc::clone(&self.analysis),
            Specialist::Code => Arc::clone(&self.code),
        }
    }

    fn improver(&self) -> Arc<dyn InputImprover> {
        match &self.improver {
            Some(improver) => Arc::clone(improver),
            None => Arc::new(CompletionImprover::new(
                Arc::clone(&self.planner),
                self.params.call_timeout,
            )),
        }
    }
}

fn panic_detail(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic with non-string payload".to_string()
    }
}
