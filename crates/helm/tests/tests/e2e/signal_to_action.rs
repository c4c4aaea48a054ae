//! E2E: a perceived signal flows through reasoning, decision, planning and
//! execution.

use helm_action::{ActionIntent, ActionOrchestrator, RollbackAction, SimulatedExecutor};
use helm_decision::DecisionEngine;
use helm_reasoning::{Evidence, ReasoningEngine, ReasoningStage};
use helm_tests::{decide_action, default_snapshot, pricing_options, request};
use helm_types::{AutonomyLevel, StructuredSignal};
use helm_world::{Domain, DomainState};

#[test]
fn risk_signal_is_gathered_as_evidence() {
    let snapshot = default_snapshot();
    let signal = StructuredSignal::new("risk_indicator", "high churn", 0.9);

    let chain = ReasoningEngine::default().reason("what is our risk?", &[signal.clone()], &snapshot, &[], &[]);

    let evidence = chain.step(ReasoningStage::EvidenceGathering).unwrap();
    assert_eq!(evidence.confidence, 0.8);
    assert!(evidence
        .evidence
        .iter()
        .any(|e| matches!(e, Evidence::Signal { signal: s } if *s == signal)));
    assert!(evidence.evidence.iter().any(|e| matches!(
        e,
        Evidence::State { state } if state.domain() == Domain::Risk
    )));
    assert!(evidence.evidence.iter().any(|e| matches!(
        e,
        Evidence::State { state: DomainState::Risk(r) } if *r == snapshot.risk
    )));
}

#[tokio::test]
async fn pricing_decision_is_planned_and_executed() {
    let record = DecisionEngine::default().decide(request(pricing_options(), vec![], AutonomyLevel::Autonomous));
    assert_eq!(record.selected_option.id.as_str(), "raise");
    assert_eq!(record.autonomy_level, AutonomyLevel::Supervised);

    let orchestrator = ActionOrchestrator::default();
    let plan = orchestrator.plan(&record);
    assert_eq!(plan.decision_id, record.id);
    assert_eq!(plan.steps.len(), 1);
    assert_eq!(plan.steps[0].intent, ActionIntent::DatabaseWrite);

    let result = orchestrator.execute(&plan, &SimulatedExecutor::new()).await;
    assert!(result.overall_success);
    assert_eq!(result.plan_id, plan.id);
}

#[tokio::test]
async fn email_and_database_decision() {
    let record = decide_action("Send email and update database");
    let orchestrator = ActionOrchestrator::default();
    let plan = orchestrator.plan(&record);

    let intents: Vec<ActionIntent> = plan.steps.iter().map(|s| s.intent).collect();
    assert_eq!(intents, vec![ActionIntent::Email, ActionIntent::DatabaseWrite]);
    assert_eq!(plan.rollback_plan.len(), 1);
    assert_eq!(plan.rollback_plan[0].action, RollbackAction::RestorePreviousState);

    let executor = SimulatedExecutor::new();
    let result = orchestrator.execute(&plan, &executor).await;
    assert!(result.overall_success);
    assert_eq!(executor.calls().len(), 2);

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["overall_success"], true);
    assert!(json["rollback_failures"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn upstream_intents_bypass_the_keyword_classifier() {
    let record = decide_action("Raise prices");
    let orchestrator = ActionOrchestrator::default();
    let plan = orchestrator.plan_with_intents(&record, &[ActionIntent::ApiCall, ActionIntent::Sms]);

    assert_eq!(plan.steps.len(), 2);
    assert_eq!(plan.rollback_plan.len(), 1);
    assert_eq!(plan.rollback_plan[0].action, RollbackAction::ReverseApiCall);
}
