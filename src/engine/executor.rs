//! Per-step execution wrapper
//!
//! Runs one step's synchronous work on a blocking thread and races it
//! against the step's timeout. Classifies the terminal state, trips the
//! shared cancellation signal on unsuppressed failure, rewrites suppressed
//! failures, and accounts for progress. Timed-out work is abandoned, not
//! killed; the blocking thread may finish later with no observer.

use std::sync::Arc;
use std::time::Instant;

use tokio::task::JoinError;
use tracing::{debug, info, warn};

use super::result::{StepOutcome, StepReport, StepStatus};
use super::run_state::RunState;
use super::runner::ProgressFn;
use crate::plan::BootStep;

/// Execute one step to a terminal state and report it.
///
/// Every terminal state (success, failure, timeout, cancellation, panic,
/// suppression) counts toward `completed_steps` exactly once and fires the
/// progress callback.
pub(crate) async fn execute_step(
    step: BootStep,
    state: Arc<RunState>,
    progress: Option<ProgressFn>,
) -> StepReport {
    let name = step.name.clone();
    let started = Instant::now();
    debug!(
        step = %name,
        mode = ?step.mode,
        timeout_ms = step.timeout.as_millis() as u64,
        "dispatching step"
    );

    let work = Arc::clone(&step.work);
    let work_state = Arc::clone(&state);
    let handle = tokio::task::spawn_blocking(move || work(&work_state));

    let (mut outcome, mut status) = match tokio::time::timeout(step.timeout, handle).await {
        Ok(Ok(outcome)) => {
            let status = if outcome.success {
                StepStatus::Succeeded
            } else {
                StepStatus::Failed
            };
            (outcome, status)
        }
        Ok(Err(join_err)) => {
            // Work panicked instead of returning an outcome. Convert to a
            // failure and trip cancellation right away.
            let message = panic_message(join_err);
            warn!(step = %name, error = %message, "step raised an unexpected error");
            state.cancel();
            (StepOutcome::failure(message), StepStatus::Failed)
        }
        Err(_elapsed) => {
            // Timer fired first; the work keeps running unobserved. Whether
            // we call it a timeout or a cancellation depends on the signal's
            // state at this moment.
            if state.is_cancelled() {
                let message = format!("step '{}' abandoned: run cancelled", name);
                (StepOutcome::failure(message), StepStatus::Cancelled)
            } else {
                let message = format!(
                    "step '{}' timed out after {} ms",
                    name,
                    step.timeout.as_millis()
                );
                (StepOutcome::failure(message), StepStatus::TimedOut)
            }
        }
    };

    if !outcome.success {
        if step.suppress_error {
            let original = outcome
                .message
                .take()
                .unwrap_or_else(|| "step reported failure".to_string());
            warn!(step = %name, error = %original, "step failed; error suppressed");
            outcome = StepOutcome {
                success: true,
                message: Some(format!("suppressed error: {}", original)),
            };
            status = StepStatus::Suppressed;
        } else {
            state.cancel();
        }
    }

    let completed = state.record_completion();
    let percent = state.progress_percent(completed);
    if let Some(progress) = &progress {
        progress(percent);
    }

    info!(
        step = %name,
        status = ?status,
        success = outcome.success,
        completed,
        total = state.total_steps(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "step finished"
    );

    StepReport {
        step: name,
        status,
        outcome,
    }
}

fn panic_message(err: JoinError) -> String {
    match err.try_into_panic() {
        Ok(payload) => {
            if let Some(s) = payload.downcast_ref::<&str>() {
                (*s).to_string()
            } else if let Some(s) = payload.downcast_ref::<String>() {
                s.clone()
            } else {
                "step panicked".to_string()
            }
        }
        Err(err) => err.to_string(),
    }
}
