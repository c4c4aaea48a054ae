//! Action plans.

use std::time::Duration;

use helm_types::{DecisionId, PlanId, StepId};
use serde::{Deserialize, Serialize};

use crate::intent::{ActionIntent, RollbackAction};

/// What the orchestrator does after a step fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Record the failure and run the next step.
    #[default]
    Continue,
    /// Stop the plan; leave completed steps in place.
    Halt,
    /// Undo completed steps in reverse order, then stop.
    Rollback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionStep {
    pub id: StepId,
    /// Zero-based execution position.
    pub order: usize,
    pub intent: ActionIntent,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollbackStep {
    /// The forward step this undoes.
    pub step_id: StepId,
    pub intent: ActionIntent,
    pub action: RollbackAction,
    pub description: String,
}

/// Post-step check and the policy applied when the step fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCheck {
    pub step_id: StepId,
    pub description: String,
    pub on_failure: FailurePolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPlan {
    pub id: PlanId,
    pub decision_id: DecisionId,
    pub steps: Vec<ActionStep>,
    /// Reverse execution order; only rollback-eligible steps appear.
    pub rollback_plan: Vec<RollbackStep>,
    /// One per step.
    pub verifications: Vec<VerificationCheck>,
    pub timeout_ms: u64,
}

impl ActionPlan {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn verification_for(&self, step_id: &StepId) -> Option<&VerificationCheck> {
        self.verifications.iter().find(|v| &v.step_id == step_id)
    }

    pub fn rollback_for(&self, step_id: &StepId) -> Option<&RollbackStep> {
        self.rollback_plan.iter().find(|r| &r.step_id == step_id)
    }

    pub fn step(&self, step_id: &StepId) -> Option<&ActionStep> {
        self.steps.iter().find(|s| &s.id == step_id)
    }
}
