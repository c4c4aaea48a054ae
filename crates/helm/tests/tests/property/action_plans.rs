//! Property tests: every action yields a plan, and a rollback-triggering
//! failure unwinds exactly the completed, reversible steps in reverse.

use helm_action::{ActionIntent, ActionOrchestrator, ExecutorCall, SimulatedExecutor};
use helm_tests::decide_action;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn arb_intent() -> impl Strategy<Value = ActionIntent> {
    prop::sample::select(ActionIntent::ALL.to_vec())
}

/// Intents without payments, so that only the injected payment fails.
fn arb_non_payment_intent() -> impl Strategy<Value = ActionIntent> {
    arb_intent().prop_filter("payment is the failing step", |i| *i != ActionIntent::Payment)
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn every_action_yields_at_least_one_step(action in "[A-Za-z ]{1,40}") {
        let record = decide_action(&action);
        let plan = ActionOrchestrator::default().plan(&record);

        prop_assert!(!plan.steps.is_empty());
        prop_assert_eq!(plan.verifications.len(), plan.steps.len());
        prop_assert_eq!(plan.timeout_ms, 30_000 + 10_000 * plan.steps.len() as u64);
    }

    #[test]
    fn rollback_plan_mirrors_eligible_steps(intents in prop::collection::vec(arb_intent(), 0..10)) {
        let record = decide_action("Run the playbook");
        let plan = ActionOrchestrator::default().plan_with_intents(&record, &intents);

        let expected: Vec<_> = plan
            .steps
            .iter()
            .rev()
            .filter(|s| s.intent.is_rollback_eligible())
            .map(|s| s.id.clone())
            .collect();
        let actual: Vec<_> = plan.rollback_plan.iter().map(|r| r.step_id.clone()).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn payment_failure_unwinds_completed_steps_lifo(
        before in prop::collection::vec(arb_non_payment_intent(), 0..6),
        after in prop::collection::vec(arb_non_payment_intent(), 0..4),
    ) {
        let mut intents = before.clone();
        intents.push(ActionIntent::Payment);
        intents.extend(after);

        let record = decide_action("Run the playbook");
        let orchestrator = ActionOrchestrator::default();
        let plan = orchestrator.plan_with_intents(&record, &intents);
        let executor = SimulatedExecutor::new().fail_intent(ActionIntent::Payment);

        let rt = tokio::runtime::Runtime::new().unwrap();
        let result = rt.block_on(orchestrator.execute(&plan, &executor));

        let payment = &plan.steps[before.len()];
        let expected: Vec<_> = plan.steps[..before.len()]
            .iter()
            .rev()
            .filter(|s| s.intent.is_rollback_eligible())
            .map(|s| s.id.clone())
            .collect();

        prop_assert_eq!(&result.rolled_back, &expected);
        prop_assert_eq!(result.halted_at.as_ref(), Some(&payment.id));

        // Nothing after the payment ran, and rollbacks followed the failure.
        let executed: Vec<_> = executor
            .calls()
            .into_iter()
            .filter_map(|c| match c {
                ExecutorCall::Execute(id) => Some(id),
                ExecutorCall::Rollback(_) => None,
            })
            .collect();
        let upto: Vec<_> = plan.steps[..=before.len()].iter().map(|s| s.id.clone()).collect();
        prop_assert_eq!(executed, upto);
    }
}
