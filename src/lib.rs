//! # Boot Runner
//!
//! A startup-sequence orchestration engine: register an ordered list of boot
//! steps, declare how each one executes, and run them under a shared
//! cancellation signal with per-step timeouts and aggregate progress.
//!
//! ## Features
//!
//! - **Three execution modes** - Sequential (blocks the dispatch loop),
//!   Parallel (joined together at the end), Forget (fire-and-forget)
//! - **Per-step timeouts** - Each step races its work against a timer
//!   (default 25 seconds); timed-out work is abandoned, never killed
//! - **Cooperative cancellation** - One single-fire signal per run, tripped
//!   by the first unsuppressed failure, polled by step work
//! - **Error suppression** - Mark a step non-fatal and its failures are
//!   rewritten to informational successes
//! - **Progress reporting** - A callback receives `0..=100` as steps complete
//! - **YAML overrides** - Tune step timeouts and suppression from a config
//!   file without touching registration code
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use boot_runner::prelude::*;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let plan = BootPlan::build(vec![
//!         BootStep::new("verify-install", StepMode::Sequential, |_state| StepOutcome::ok()),
//!         BootStep::new("download-catalog", StepMode::Parallel, |_state| StepOutcome::ok())
//!             .with_timeout(Duration::from_secs(5)),
//!         BootStep::new("show-consent-prompt", StepMode::Forget, |_state| StepOutcome::ok()),
//!     ])?;
//!
//!     let runner = BootRunner::new().on_progress(|pct| println!("% {pct}"));
//!     let outcome = runner.run(&plan).await;
//!
//!     println!("Boot finished: success={}", outcome.success);
//!     Ok(())
//! }
//! ```

pub mod engine;
pub mod plan;

// Re-export main types
pub use engine::{
    BootRunner, ProgressFn, RunOutcome, RunState, StepOutcome, StepReport, StepStatus,
};
pub use plan::{
    BootPlan, BootStep, ConfigError, PlanConfig, PlanError, StepMode, StepOverride, StepWork,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::engine::{
        BootRunner, RunOutcome, RunState, StepOutcome, StepReport, StepStatus,
    };
    pub use crate::plan::{
        BootPlan, BootStep, ConfigError, PlanConfig, PlanError, StepMode, StepOverride,
    };
}
