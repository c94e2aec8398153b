//! Boot plan builder
//!
//! An ordered registry of boot steps. Declaration order is execution order;
//! step names must be unique so override configs can address them.

use std::collections::HashSet;

use super::step::BootStep;

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("Duplicate step name: {0}")]
    DuplicateStep(String),
}

/// An ordered, validated list of boot steps.
#[derive(Debug, Clone, Default)]
pub struct BootPlan {
    steps: Vec<BootStep>,
}

impl BootPlan {
    /// Build a plan from steps in declaration order.
    ///
    /// Fails if two steps share a name.
    pub fn build(steps: Vec<BootStep>) -> Result<Self, PlanError> {
        let mut seen = HashSet::new();
        for step in &steps {
            if !seen.insert(step.name().to_string()) {
                return Err(PlanError::DuplicateStep(step.name().to_string()));
            }
        }

        Ok(Self { steps })
    }

    /// Steps in declaration order.
    pub fn steps(&self) -> &[BootStep] {
        &self.steps
    }

    /// Look up a step by name.
    pub fn get_step(&self, name: &str) -> Option<&BootStep> {
        self.steps.iter().find(|s| s.name() == name)
    }

    pub(crate) fn step_mut(&mut self, name: &str) -> Option<&mut BootStep> {
        self.steps.iter_mut().find(|s| s.name() == name)
    }

    /// Names of registered steps, in declaration order.
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::StepOutcome;
    use crate::plan::StepMode;

    fn noop_step(name: &str) -> BootStep {
        BootStep::new(name, StepMode::Sequential, |_| StepOutcome::ok())
    }

    #[test]
    fn test_build_preserves_order() {
        let plan = BootPlan::build(vec![
            noop_step("first"),
            noop_step("second"),
            noop_step("third"),
        ])
        .unwrap();

        assert_eq!(plan.len(), 3);
        assert_eq!(plan.step_names(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let result = BootPlan::build(vec![noop_step("same"), noop_step("same")]);

        assert!(matches!(result, Err(PlanError::DuplicateStep(name)) if name == "same"));
    }

    #[test]
    fn test_get_step() {
        let plan = BootPlan::build(vec![noop_step("present")]).unwrap();

        assert!(plan.get_step("present").is_some());
        assert!(plan.get_step("absent").is_none());
    }

    #[test]
    fn test_empty_plan() {
        let plan = BootPlan::build(vec![]).unwrap();

        assert!(plan.is_empty());
        assert_eq!(plan.len(), 0);
    }
}
