//! Boot plan types and definitions
//!
//! This module contains everything needed to describe a boot sequence:
//! - `step` - StepMode and BootStep descriptors
//! - `plan` - BootPlan, the ordered step registry
//! - `config` - YAML override config for registered steps

pub mod config;
pub mod plan;
pub mod step;

// Re-export all public types for convenience
pub use config::{ConfigError, PlanConfig, StepOverride};
pub use plan::{BootPlan, PlanError};
pub use step::{BootStep, StepMode, StepWork, DEFAULT_STEP_TIMEOUT};
