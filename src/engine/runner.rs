//! Boot runner - dispatches a plan and aggregates the outcome
//!
//! The runner walks the plan strictly in declared order. Sequential steps
//! suspend the loop and abort the run on failure; Parallel steps are spawned
//! and joined together after the loop; Forget steps are spawned and never
//! looked at again. Exactly one `RunOutcome` comes back.

use std::sync::Arc;

use futures::future::join_all;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use super::executor::execute_step;
use super::result::{RunOutcome, StepOutcome, StepReport, StepStatus};
use super::run_state::RunState;
use crate::plan::{BootPlan, StepMode};

/// Progress sink: receives `floor(100 * completed / total)` each time a step
/// reaches a terminal state. May be called concurrently from parallel steps,
/// but each call observes a distinct, increasing counter value.
pub type ProgressFn = Arc<dyn Fn(u8) + Send + Sync>;

/// Orchestrates one boot plan per `run` call.
#[derive(Default)]
pub struct BootRunner {
    progress: Option<ProgressFn>,
}

impl BootRunner {
    pub fn new() -> Self {
        Self { progress: None }
    }

    /// Install a progress callback, invoked only from within step execution.
    pub fn on_progress<F>(mut self, progress: F) -> Self
    where
        F: Fn(u8) + Send + Sync + 'static,
    {
        self.progress = Some(Arc::new(progress));
        self
    }

    /// Run every step of the plan and aggregate one outcome.
    ///
    /// The shared run state is created here, fresh for this run, with the
    /// step total fixed before the first dispatch.
    pub async fn run(&self, plan: &BootPlan) -> RunOutcome {
        let state = Arc::new(RunState::new(plan.len()));
        info!(run_id = %state.run_id(), total = plan.len(), "starting boot run");

        let mut parallel: Vec<(String, JoinHandle<StepReport>)> = Vec::new();
        let mut suppressed_note: Option<String> = None;

        for step in plan.steps() {
            match step.mode() {
                StepMode::Sequential => {
                    let report =
                        execute_step(step.clone(), Arc::clone(&state), self.progress.clone())
                            .await;

                    if !report.outcome.success {
                        warn!(
                            run_id = %state.run_id(),
                            step = %report.step,
                            "sequential step failed; aborting run"
                        );
                        // Already-dispatched parallel steps keep running
                        // unobserved, with the cancellation signal set.
                        return finish(&state, false, report.outcome.message);
                    }
                    note_suppression(&mut suppressed_note, &report);
                }
                StepMode::Parallel => {
                    let handle = tokio::spawn(execute_step(
                        step.clone(),
                        Arc::clone(&state),
                        self.progress.clone(),
                    ));
                    parallel.push((step.name().to_string(), handle));
                }
                StepMode::Forget => {
                    drop(tokio::spawn(execute_step(
                        step.clone(),
                        Arc::clone(&state),
                        self.progress.clone(),
                    )));
                }
            }
        }

        if parallel.is_empty() {
            return finish(&state, true, suppressed_note);
        }

        debug!(
            run_id = %state.run_id(),
            parallel = parallel.len(),
            "joining parallel steps"
        );
        let (names, handles): (Vec<_>, Vec<_>) = parallel.into_iter().unzip();
        let joined = join_all(handles).await;

        let mut first_failure: Option<StepOutcome> = None;
        for (name, joined) in names.into_iter().zip(joined) {
            let report = match joined {
                Ok(report) => report,
                Err(err) => {
                    error!(step = %name, error = %err, "parallel step task could not be joined");
                    StepReport {
                        step: name.clone(),
                        status: StepStatus::Failed,
                        outcome: StepOutcome::failure(format!(
                            "step '{}' could not be joined: {}",
                            name, err
                        )),
                    }
                }
            };

            if report.outcome.success {
                note_suppression(&mut suppressed_note, &report);
            } else if first_failure.is_none() {
                first_failure = Some(report.outcome);
            }
        }

        match first_failure {
            Some(outcome) => finish(&state, false, outcome.message),
            None => finish(&state, true, suppressed_note),
        }
    }
}

/// Keep the first suppression marker so a fully "successful" run can still
/// carry the informational note in its message.
fn note_suppression(note: &mut Option<String>, report: &StepReport) {
    if note.is_none() && report.status == StepStatus::Suppressed {
        note.clone_from(&report.outcome.message);
    }
}

fn finish(state: &RunState, success: bool, message: Option<String>) -> RunOutcome {
    let outcome = RunOutcome {
        success,
        message,
        run_id: state.run_id().to_string(),
        completed_steps: state.completed_steps(),
    };
    info!(
        run_id = %outcome.run_id,
        success = outcome.success,
        completed = outcome.completed_steps,
        "boot run finished"
    );
    outcome
}
