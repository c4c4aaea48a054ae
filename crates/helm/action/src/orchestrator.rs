//! The action orchestrator.
//!
//! Plans are executed strictly in order. On a failed step the step's
//! [`FailurePolicy`] decides what happens next:
//!
//! ```text
//!   step ok ──────────────> next step
//!   step failed ─┬─ Continue ─> next step
//!                ├─ Halt ─────> stop
//!                └─ Rollback ─> undo completed steps (LIFO) ─> stop
//! ```
//!
//! Executor errors become [`ActionError`] entries; `execute` itself never
//! fails.

use std::time::Duration;

use helm_decision::DecisionRecord;
use helm_types::{PlanId, StepId};
use tokio::time::Instant;

use crate::config::OrchestratorConfig;
use crate::error::ExecutorError;
use crate::executor::{Executor, StepOutcome};
use crate::intent::{ActionIntent, IntentClassifier, KeywordIntentClassifier};
use crate::plan::{ActionPlan, ActionStep, FailurePolicy, RollbackStep, VerificationCheck};
use crate::result::{ActionError, ActionErrorKind, ActionResult, RollbackFailure, StepResult, StepStatus};

pub struct ActionOrchestrator {
    config: OrchestratorConfig,
    classifier: Box<dyn IntentClassifier>,
}

impl Default for ActionOrchestrator {
    fn default() -> Self {
        Self::new(OrchestratorConfig::default())
    }
}

impl ActionOrchestrator {
    /// Create an orchestrator that classifies actions by keyword.
    pub fn new(config: OrchestratorConfig) -> Self {
        Self {
            config,
            classifier: Box::new(KeywordIntentClassifier),
        }
    }

    pub fn with_classifier(mut self, classifier: Box<dyn IntentClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Plan the decision's selected action using the configured classifier.
    pub fn plan(&self, record: &DecisionRecord) -> ActionPlan {
        let intents = self.classifier.classify(&record.selected_option.action);
        self.plan_with_intents(record, &intents)
    }

    /// Plan from intents classified upstream.
    ///
    /// With no intents the plan is a single database write logging the
    /// decision, so every decision leaves an auditable step.
    pub fn plan_with_intents(&self, record: &DecisionRecord, intents: &[ActionIntent]) -> ActionPlan {
        let action = record.selected_option.action.as_str();

        let steps: Vec<ActionStep> = if intents.is_empty() {
            vec![ActionStep {
                id: StepId::generate(),
                order: 0,
                intent: ActionIntent::DatabaseWrite,
                description: format!("Log decision: {}", action),
            }]
        } else {
            intents
                .iter()
                .enumerate()
                .map(|(order, intent)| ActionStep {
                    id: StepId::generate(),
                    order,
                    intent: *intent,
                    description: intent.describe(action),
                })
                .collect()
        };

        let rollback_plan: Vec<RollbackStep> = steps
            .iter()
            .rev()
            .filter_map(|step| {
                step.intent.rollback_action().map(|rollback| RollbackStep {
                    step_id: step.id.clone(),
                    intent: step.intent,
                    action: rollback,
                    description: format!("{} for '{}'", rollback, step.description),
                })
            })
            .collect();

        let verifications = steps
            .iter()
            .map(|step| VerificationCheck {
                step_id: step.id.clone(),
                description: format!("Verify {} step completed", step.intent),
                on_failure: self.failure_policy_for(step.intent),
            })
            .collect();

        let plan = ActionPlan {
            id: PlanId::generate(),
            decision_id: record.id.clone(),
            timeout_ms: self.config.plan_timeout_ms(steps.len()),
            steps,
            rollback_plan,
            verifications,
        };

        tracing::info!(
            plan_id = %plan.id,
            decision_id = %plan.decision_id,
            steps = plan.steps.len(),
            rollback_steps = plan.rollback_plan.len(),
            "Action plan created"
        );
        plan
    }

    fn failure_policy_for(&self, intent: ActionIntent) -> FailurePolicy {
        match intent {
            ActionIntent::Payment => FailurePolicy::Rollback,
            _ => self.config.default_failure_policy,
        }
    }

    /// Execute a plan step by step against `executor`.
    pub async fn execute(&self, plan: &ActionPlan, executor: &dyn Executor) -> ActionResult {
        let started = Instant::now();
        let budget = plan.timeout();

        tracing::info!(
            plan_id = %plan.id,
            executor = executor.name(),
            steps = plan.steps.len(),
            "Executing action plan"
        );

        let mut step_results = Vec::with_capacity(plan.steps.len());
        let mut errors = Vec::new();
        let mut completed: Vec<&ActionStep> = Vec::new();
        let mut rolled_back = Vec::new();
        let mut rollback_failures = Vec::new();
        let mut halted_at = None;

        for step in &plan.steps {
            let step_started = Instant::now();
            let remaining = budget.saturating_sub(started.elapsed());
            let attempt = self.attempt(step, executor, remaining).await;
            let duration_ms = step_started.elapsed().as_millis() as u64;

            let failure = match attempt {
                Ok(outcome) => {
                    tracing::debug!(step_id = %step.id, intent = %step.intent, "Step succeeded");
                    step_results.push(StepResult {
                        step_id: step.id.clone(),
                        intent: step.intent,
                        status: StepStatus::Succeeded,
                        output: Some(outcome.output),
                        verified: true,
                        duration_ms,
                    });
                    completed.push(step);
                    continue;
                }
                Err(failure) => failure,
            };

            let (status, kind, message, output) = match failure {
                StepFailure::Executor(e) => (StepStatus::Failed, ActionErrorKind::Execution, e.to_string(), None),
                StepFailure::Unverified(outcome) => (
                    StepStatus::Failed,
                    ActionErrorKind::Verification,
                    format!("verification failed for {} step", step.intent),
                    Some(outcome.output),
                ),
                StepFailure::TimedOut(after) => (
                    StepStatus::TimedOut,
                    ActionErrorKind::Timeout,
                    format!("step exceeded remaining plan budget of {}ms", after.as_millis()),
                    None,
                ),
            };

            let policy = plan
                .verification_for(&step.id)
                .map(|v| v.on_failure)
                .unwrap_or_else(|| self.failure_policy_for(step.intent));

            tracing::warn!(
                plan_id = %plan.id,
                step_id = %step.id,
                intent = %step.intent,
                policy = ?policy,
                error = %message,
                "Step failed"
            );

            step_results.push(StepResult {
                step_id: step.id.clone(),
                intent: step.intent,
                status,
                output,
                verified: false,
                duration_ms,
            });
            errors.push(ActionError {
                step_id: step.id.clone(),
                kind,
                message,
                recoverable: step.intent.is_rollback_eligible(),
            });

            match policy {
                FailurePolicy::Continue => {}
                FailurePolicy::Halt => {
                    halted_at = Some(step.id.clone());
                    break;
                }
                FailurePolicy::Rollback => {
                    self.unwind(plan, &completed, executor, &mut rolled_back, &mut rollback_failures)
                        .await;
                    halted_at = Some(step.id.clone());
                    break;
                }
            }
        }

        let elapsed = started.elapsed();
        let timed_out = elapsed > budget;
        if timed_out {
            tracing::warn!(
                plan_id = %plan.id,
                elapsed_ms = elapsed.as_millis() as u64,
                budget_ms = plan.timeout_ms,
                "Action plan exceeded its timeout"
            );
        }

        let result = ActionResult {
            plan_id: plan.id.clone(),
            overall_success: errors.is_empty(),
            step_results,
            errors,
            execution_time_ms: elapsed.as_millis() as u64,
            rolled_back,
            rollback_failures,
            halted_at,
            timed_out,
        };

        tracing::info!(
            plan_id = %plan.id,
            success = result.overall_success,
            errors = result.errors.len(),
            rolled_back = result.rolled_back.len(),
            "Action plan finished"
        );
        result
    }

    async fn attempt(
        &self,
        step: &ActionStep,
        executor: &dyn Executor,
        remaining: Duration,
    ) -> Result<StepOutcome, StepFailure> {
        let outcome = if self.config.enforce_timeout {
            match tokio::time::timeout(remaining, executor.execute(step)).await {
                Ok(result) => result.map_err(StepFailure::Executor)?,
                Err(_) => return Err(StepFailure::TimedOut(remaining)),
            }
        } else {
            executor.execute(step).await.map_err(StepFailure::Executor)?
        };

        if outcome.verified {
            Ok(outcome)
        } else {
            Err(StepFailure::Unverified(outcome))
        }
    }

    /// Undo completed steps, most recent first. Failures are recorded and
    /// the unwind carries on with the remaining steps.
    async fn unwind(
        &self,
        plan: &ActionPlan,
        completed: &[&ActionStep],
        executor: &dyn Executor,
        rolled_back: &mut Vec<StepId>,
        rollback_failures: &mut Vec<RollbackFailure>,
    ) {
        for step in completed.iter().rev() {
            let Some(rollback) = plan.rollback_for(&step.id) else {
                continue;
            };

            match executor.rollback(rollback).await {
                Ok(()) => {
                    tracing::info!(step_id = %step.id, action = %rollback.action, "Step rolled back");
                    rolled_back.push(step.id.clone());
                }
                Err(e) => {
                    tracing::warn!(
                        step_id = %step.id,
                        action = %rollback.action,
                        error = %e,
                        "Rollback failed; manual reconciliation required"
                    );
                    rollback_failures.push(RollbackFailure {
                        step_id: step.id.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }
    }
}

enum StepFailure {
    Executor(ExecutorError),
    Unverified(StepOutcome),
    TimedOut(Duration),
}
