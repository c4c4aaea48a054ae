//! Executor contract.
//!
//! The orchestrator never touches the outside world itself: every step and
//! every rollback goes through an [`Executor`]. Concrete executors (email
//! gateways, databases, payment providers) live outside this crate.
//! [`SimulatedExecutor`] backs tests and the CLI.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use helm_types::StepId;
use serde::{Deserialize, Serialize};

use crate::error::{ExecutorError, ExecutorResult};
use crate::intent::ActionIntent;
use crate::plan::{ActionStep, RollbackStep};

// ── Executor Trait ──────────────────────────────────────────────────────

/// What a step produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepOutcome {
    pub output: serde_json::Value,
    /// Whether the post-step verification check passed.
    pub verified: bool,
}

impl StepOutcome {
    pub fn verified(output: serde_json::Value) -> Self {
        Self {
            output,
            verified: true,
        }
    }
}

/// Performs steps and their rollbacks.
///
/// Shared by every plan that runs concurrently; implementations must be
/// safe for concurrent use.
#[async_trait]
pub trait Executor: Send + Sync {
    async fn execute(&self, step: &ActionStep) -> ExecutorResult<StepOutcome>;

    async fn rollback(&self, rollback: &RollbackStep) -> ExecutorResult<()>;

    /// Name of this executor for logging.
    fn name(&self) -> &str;
}

// ── Simulated Executor ─────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "call", content = "step_id", rename_all = "snake_case")]
pub enum ExecutorCall {
    Execute(StepId),
    Rollback(StepId),
}

/// An executor that applies nothing.
///
/// Succeeds unless configured to fail a step (by id or by intent), to
/// fail its verification, or to fail its rollback. Every call is recorded
/// in order.
#[derive(Debug, Default)]
pub struct SimulatedExecutor {
    failing_steps: HashSet<StepId>,
    failing_intents: HashSet<ActionIntent>,
    unverified_intents: HashSet<ActionIntent>,
    failing_rollbacks: HashSet<ActionIntent>,
    slow_intents: HashMap<ActionIntent, Duration>,
    calls: Mutex<Vec<ExecutorCall>>,
}

impl SimulatedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_step(mut self, step_id: StepId) -> Self {
        self.failing_steps.insert(step_id);
        self
    }

    pub fn fail_intent(mut self, intent: ActionIntent) -> Self {
        self.failing_intents.insert(intent);
        self
    }

    pub fn fail_verification(mut self, intent: ActionIntent) -> Self {
        self.unverified_intents.insert(intent);
        self
    }

    pub fn fail_rollback(mut self, intent: ActionIntent) -> Self {
        self.failing_rollbacks.insert(intent);
        self
    }

    /// Delay execution of steps with `intent` by `delay`.
    pub fn slow_intent(mut self, intent: ActionIntent, delay: Duration) -> Self {
        self.slow_intents.insert(intent, delay);
        self
    }

    /// Calls received so far, in order.
    pub fn calls(&self) -> Vec<ExecutorCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn record(&self, call: ExecutorCall) {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).push(call);
    }
}

#[async_trait]
impl Executor for SimulatedExecutor {
    async fn execute(&self, step: &ActionStep) -> ExecutorResult<StepOutcome> {
        self.record(ExecutorCall::Execute(step.id.clone()));

        if let Some(delay) = self.slow_intents.get(&step.intent) {
            tokio::time::sleep(*delay).await;
        }

        if self.failing_steps.contains(&step.id) || self.failing_intents.contains(&step.intent) {
            return Err(ExecutorError::StepFailed(format!(
                "simulated failure of {} step '{}'",
                step.intent, step.description
            )));
        }

        Ok(StepOutcome {
            output: serde_json::json!({
                "simulated": true,
                "intent": step.intent,
                "step_id": step.id,
            }),
            verified: !self.unverified_intents.contains(&step.intent),
        })
    }

    async fn rollback(&self, rollback: &RollbackStep) -> ExecutorResult<()> {
        self.record(ExecutorCall::Rollback(rollback.step_id.clone()));

        if self.failing_rollbacks.contains(&rollback.intent) {
            return Err(ExecutorError::RollbackFailed(format!(
                "simulated {} failure for step {}",
                rollback.action, rollback.step_id
            )));
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "simulated-executor"
    }
}
