//! Step descriptors
//!
//! A `BootStep` is an immutable description of one unit of startup work:
//! a diagnostic name, an execution mode, a timeout, an error-suppression
//! flag, and the work itself.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::engine::{RunState, StepOutcome};

/// Default per-step timeout when none is configured.
pub const DEFAULT_STEP_TIMEOUT: Duration = Duration::from_millis(25_000);

/// How a step is dispatched relative to the rest of the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMode {
    /// Runs to completion (or aborts the run) before any later step starts.
    Sequential,
    /// Dispatched without blocking; all parallel steps are joined at the end.
    Parallel,
    /// Dispatched and never awaited; its outcome never influences the run.
    Forget,
}

/// The work a step performs.
///
/// Synchronous and allowed to block; it runs on a dedicated blocking thread.
/// Polling [`RunState::is_cancelled`] during long blocking sections is the
/// work's only cooperative duty.
pub type StepWork = Arc<dyn Fn(&RunState) -> StepOutcome + Send + Sync>;

/// A single unit of startup work with its execution policy.
///
/// Built once by the caller, never mutated by the engine. Cloning is cheap:
/// the work closure is shared behind an `Arc`.
#[derive(Clone)]
pub struct BootStep {
    pub(crate) name: String,
    pub(crate) mode: StepMode,
    pub(crate) timeout: Duration,
    pub(crate) suppress_error: bool,
    pub(crate) work: StepWork,
}

impl BootStep {
    /// Create a step with the default timeout and suppression off.
    pub fn new<F>(name: impl Into<String>, mode: StepMode, work: F) -> Self
    where
        F: Fn(&RunState) -> StepOutcome + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            mode,
            timeout: DEFAULT_STEP_TIMEOUT,
            suppress_error: false,
            work: Arc::new(work),
        }
    }

    /// Override the timeout for this step.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Rewrite any failure of this step into an informational success.
    pub fn with_suppress_error(mut self, suppress: bool) -> Self {
        self.suppress_error = suppress;
        self
    }

    /// Diagnostic name of this step.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Execution mode of this step.
    pub fn mode(&self) -> StepMode {
        self.mode
    }

    /// Configured timeout for this step.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether failures of this step are suppressed.
    pub fn suppress_error(&self) -> bool {
        self.suppress_error
    }
}

impl fmt::Debug for BootStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootStep")
            .field("name", &self.name)
            .field("mode", &self.mode)
            .field("timeout", &self.timeout)
            .field("suppress_error", &self.suppress_error)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_defaults() {
        let step = BootStep::new("check", StepMode::Sequential, |_| StepOutcome::ok());

        assert_eq!(step.name(), "check");
        assert_eq!(step.mode(), StepMode::Sequential);
        assert_eq!(step.timeout(), DEFAULT_STEP_TIMEOUT);
        assert!(!step.suppress_error());
    }

    #[test]
    fn test_step_builders() {
        let step = BootStep::new("download", StepMode::Parallel, |_| StepOutcome::ok())
            .with_timeout(Duration::from_millis(500))
            .with_suppress_error(true);

        assert_eq!(step.timeout(), Duration::from_millis(500));
        assert!(step.suppress_error());
    }

    #[test]
    fn test_step_clone_shares_work() {
        let step = BootStep::new("shared", StepMode::Forget, |_| {
            StepOutcome::failure("always fails")
        });
        let cloned = step.clone();

        assert_eq!(cloned.name(), "shared");
        assert!(Arc::ptr_eq(&step.work, &cloned.work));
    }
}
