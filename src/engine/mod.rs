//! Boot execution engine module
//!
//! This module contains:
//! - `runner` - The orchestrator dispatching steps by mode
//! - `executor` - The per-step timeout/cancellation wrapper
//! - `run_state` - State shared by every step of one run
//! - `result` - Step and run outcome types

pub mod executor;
pub mod result;
pub mod run_state;
pub mod runner;

pub use result::{RunOutcome, StepOutcome, StepReport, StepStatus};
pub use run_state::RunState;
pub use runner::{BootRunner, ProgressFn};
