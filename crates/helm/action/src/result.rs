use helm_types::{PlanId, StepId};
use serde::{Deserialize, Serialize};

use crate::intent::ActionIntent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Succeeded,
    Failed,
    TimedOut,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    pub step_id: StepId,
    pub intent: ActionIntent,
    pub status: StepStatus,
    pub output: Option<serde_json::Value>,
    pub verified: bool,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionErrorKind {
    /// The executor reported an error.
    Execution,
    /// The step ran but its verification check failed.
    Verification,
    /// The step outlived the plan's timeout budget.
    Timeout,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionError {
    pub step_id: StepId,
    pub kind: ActionErrorKind,
    pub message: String,
    /// True when the step's effects can be rolled back.
    pub recoverable: bool,
}

/// A rollback that did not complete. The step's effects are still in
/// place and need reconciling by an operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollbackFailure {
    pub step_id: StepId,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResult {
    pub plan_id: PlanId,
    pub step_results: Vec<StepResult>,
    pub errors: Vec<ActionError>,
    /// True when no step failed.
    pub overall_success: bool,
    /// Observed wall-clock time of the whole run.
    pub execution_time_ms: u64,
    /// Steps undone, in the order they were undone.
    pub rolled_back: Vec<StepId>,
    pub rollback_failures: Vec<RollbackFailure>,
    /// Step whose failure stopped the plan, if any.
    pub halted_at: Option<StepId>,
    /// Whether the run exceeded the plan's timeout budget.
    pub timed_out: bool,
}

impl ActionResult {
    pub fn succeeded_steps(&self) -> impl Iterator<Item = &StepId> {
        self.step_results
            .iter()
            .filter(|r| r.status == StepStatus::Succeeded)
            .map(|r| &r.step_id)
    }

    /// True when a rollback left effects in place.
    pub fn needs_reconciliation(&self) -> bool {
        !self.rollback_failures.is_empty()
    }
}
