//! Step override config
//!
//! Tunable knobs of registered steps (timeout, error suppression) can be
//! overridden from a YAML document without touching registration code:
//!
//! ```yaml
//! steps:
//!   download-catalog:
//!     timeout_ms: 5000
//!   upload-session-report:
//!     suppress_error: true
//! ```
//!
//! Execution mode and the work itself are code-level decisions and cannot
//! be overridden.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::plan::BootPlan;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error in {file}: {error}")]
    Yaml {
        file: String,
        error: serde_yaml::Error,
    },

    #[error("Override references unknown step: {0}")]
    UnknownStep(String),
}

/// Per-step overrides, keyed by step name.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlanConfig {
    #[serde(default)]
    pub steps: HashMap<String, StepOverride>,
}

/// Overridable knobs of a single step. Absent fields keep the registered
/// value.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StepOverride {
    pub timeout_ms: Option<u64>,
    pub suppress_error: Option<bool>,
}

impl PlanConfig {
    /// Load overrides from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| ConfigError::Yaml {
            file: path.display().to_string(),
            error: e,
        })
    }

    /// Parse overrides from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Yaml {
            file: "<inline>".to_string(),
            error: e,
        })
    }

    /// Apply the overrides to a plan.
    ///
    /// Every override must name a registered step; an unknown name fails the
    /// whole application so typos surface early.
    pub fn apply(&self, plan: &mut BootPlan) -> Result<(), ConfigError> {
        for (name, over) in &self.steps {
            let step = plan
                .step_mut(name)
                .ok_or_else(|| ConfigError::UnknownStep(name.clone()))?;

            if let Some(timeout_ms) = over.timeout_ms {
                step.timeout = std::time::Duration::from_millis(timeout_ms);
            }
            if let Some(suppress) = over.suppress_error {
                step.suppress_error = suppress;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::StepOutcome;
    use crate::plan::{BootStep, StepMode};
    use std::time::Duration;

    #[test]
    fn test_parse_overrides() {
        let config = PlanConfig::from_yaml(
            r#"
steps:
  download-catalog:
    timeout_ms: 5000
  upload-session-report:
    suppress_error: true
"#,
        )
        .unwrap();

        assert_eq!(config.steps.len(), 2);
        assert_eq!(
            config.steps["download-catalog"].timeout_ms,
            Some(5000)
        );
        assert_eq!(
            config.steps["upload-session-report"].suppress_error,
            Some(true)
        );
    }

    #[test]
    fn test_apply_overrides() {
        let mut plan = BootPlan::build(vec![BootStep::new(
            "download-catalog",
            StepMode::Parallel,
            |_| StepOutcome::ok(),
        )])
        .unwrap();

        let config = PlanConfig::from_yaml(
            r#"
steps:
  download-catalog:
    timeout_ms: 1500
    suppress_error: true
"#,
        )
        .unwrap();

        config.apply(&mut plan).unwrap();

        let step = plan.get_step("download-catalog").unwrap();
        assert_eq!(step.timeout(), Duration::from_millis(1500));
        assert!(step.suppress_error());
    }

    #[test]
    fn test_unknown_step_rejected() {
        let mut plan = BootPlan::build(vec![]).unwrap();
        let config = PlanConfig::from_yaml(
            r#"
steps:
  no-such-step:
    timeout_ms: 100
"#,
        )
        .unwrap();

        let result = config.apply(&mut plan);
        assert!(matches!(result, Err(ConfigError::UnknownStep(name)) if name == "no-such-step"));
    }

    #[test]
    fn test_invalid_yaml() {
        let result = PlanConfig::from_yaml("steps: [not, a, map]");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }
}
