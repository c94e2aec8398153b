//! Execution result types

/// Result of one step's work.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub success: bool,
    pub message: Option<String>,
}

impl StepOutcome {
    /// A plain success.
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    /// A failure carrying diagnostic text.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

impl Default for StepOutcome {
    fn default() -> Self {
        Self::ok()
    }
}

/// Terminal state of a step, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Succeeded,
    Failed,
    TimedOut,
    Cancelled,
    /// Failed, but rewritten to an informational success.
    Suppressed,
}

/// Diagnostic record of one executed step. Emitted through the logging
/// channel as the run progresses; only the outcome feeds back into the
/// runner's abort/aggregate logic.
#[derive(Debug, Clone)]
pub struct StepReport {
    pub step: String,
    pub status: StepStatus,
    pub outcome: StepOutcome,
}

/// The one aggregate result of a run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub success: bool,
    /// First relevant failure's text, or a suppression marker on success.
    pub message: Option<String>,
    pub run_id: String,
    /// Steps that had reached a terminal state when the run returned.
    pub completed_steps: usize,
}
