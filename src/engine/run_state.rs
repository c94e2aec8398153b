//! Shared run state
//!
//! One `RunState` exists per run and is shared by reference with every
//! dispatched step. It carries the single-fire cancellation signal and the
//! progress counters. It is created by the runner when a run starts and
//! discarded when the run returns, so it can never leak across runs.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Mutable state shared by all steps of a single run.
#[derive(Debug)]
pub struct RunState {
    run_id: String,
    total_steps: usize,
    completed_steps: AtomicUsize,
    cancelled: AtomicBool,
}

impl RunState {
    /// Create state for a run of `total_steps` steps, with a fresh run ID.
    pub(crate) fn new(total_steps: usize) -> Self {
        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            total_steps,
            completed_steps: AtomicUsize::new(0),
            cancelled: AtomicBool::new(false),
        }
    }

    /// Unique ID of this run.
    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// Total number of steps in the plan. Fixed before the first dispatch.
    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    /// Number of steps that reached a terminal state so far.
    pub fn completed_steps(&self) -> usize {
        self.completed_steps.load(Ordering::SeqCst)
    }

    /// Whether the shared cancellation signal has fired.
    ///
    /// Step work should poll this during long blocking sections and exit
    /// early when it returns true. Cancellation is cooperative; nothing is
    /// ever forcibly stopped.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Trip the cancellation signal. Idempotent; once set it stays set for
    /// the rest of the run. Returns true only for the call that tripped it.
    pub fn cancel(&self) -> bool {
        !self.cancelled.swap(true, Ordering::SeqCst)
    }

    /// Count one more terminal step and return the new total.
    pub(crate) fn record_completion(&self) -> usize {
        self.completed_steps.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Progress after `completed` steps, as a floored percentage.
    pub(crate) fn progress_percent(&self, completed: usize) -> u8 {
        if self.total_steps == 0 {
            return 100;
        }
        ((completed * 100) / self.total_steps) as u8
    }
}
