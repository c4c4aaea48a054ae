//! E2E: a failed payment unwinds everything that can be unwound, and a
//! failed rollback is surfaced for reconciliation.

use helm_action::{
    ActionIntent, ActionOrchestrator, ExecutorCall, FailurePolicy, OrchestratorConfig, SimulatedExecutor, StepStatus,
};
use helm_tests::decide_action;

const ONBOARDING: [ActionIntent; 6] = [
    ActionIntent::DatabaseWrite,
    ActionIntent::AgentSpawn,
    ActionIntent::Email,
    ActionIntent::Calendar,
    ActionIntent::Payment,
    ActionIntent::Notification,
];

#[tokio::test]
async fn payment_failure_unwinds_in_reverse() {
    let record = decide_action("Onboard the new client");
    let orchestrator = ActionOrchestrator::default();
    let plan = orchestrator.plan_with_intents(&record, &ONBOARDING);
    let executor = SimulatedExecutor::new().fail_intent(ActionIntent::Payment);

    let result = orchestrator.execute(&plan, &executor).await;
    let ids: Vec<_> = plan.steps.iter().map(|s| s.id.clone()).collect();

    assert!(!result.overall_success);
    assert_eq!(result.halted_at, Some(ids[4].clone()));
    // Calendar, agent spawn, database write; the email cannot be recalled.
    assert_eq!(result.rolled_back, vec![ids[3].clone(), ids[1].clone(), ids[0].clone()]);
    assert!(result.rollback_failures.is_empty());

    // The notification after the payment never ran.
    assert!(!executor.calls().contains(&ExecutorCall::Execute(ids[5].clone())));
    assert_eq!(result.step_results.len(), 5);
    assert_eq!(result.step_results[4].status, StepStatus::Failed);
}

#[tokio::test]
async fn failed_rollback_is_reported_and_unwind_continues() {
    let record = decide_action("Onboard the new client");
    let orchestrator = ActionOrchestrator::default();
    let plan = orchestrator.plan_with_intents(&record, &ONBOARDING);
    let executor = SimulatedExecutor::new()
        .fail_intent(ActionIntent::Payment)
        .fail_rollback(ActionIntent::AgentSpawn);

    let result = orchestrator.execute(&plan, &executor).await;

    assert!(result.needs_reconciliation());
    assert_eq!(result.rollback_failures.len(), 1);
    assert_eq!(result.rollback_failures[0].step_id, plan.steps[1].id);
    assert_eq!(
        result.rolled_back,
        vec![plan.steps[3].id.clone(), plan.steps[0].id.clone()]
    );
}

#[tokio::test]
async fn halt_by_default_stops_before_payment() {
    let record = decide_action("Onboard the new client");
    let orchestrator = ActionOrchestrator::new(OrchestratorConfig {
        default_failure_policy: FailurePolicy::Halt,
        ..OrchestratorConfig::default()
    });
    let plan = orchestrator.plan_with_intents(&record, &ONBOARDING);
    let executor = SimulatedExecutor::new().fail_intent(ActionIntent::Calendar);

    let result = orchestrator.execute(&plan, &executor).await;

    assert_eq!(result.halted_at, Some(plan.steps[3].id.clone()));
    assert!(result.rolled_back.is_empty());
    assert!(!executor
        .calls()
        .contains(&ExecutorCall::Execute(plan.steps[4].id.clone())));
}
