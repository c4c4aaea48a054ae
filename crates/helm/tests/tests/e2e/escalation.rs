//! E2E: a company short on runway, with a hard runway rule, escalates
//! instead of acting.

use helm_action::{ActionIntent, ActionOrchestrator, SimulatedExecutor};
use helm_decision::{DecisionEngine, DecisionRequest, ESCALATION_ACTION};
use helm_reasoning::{ReasoningEngine, Verdict};
use helm_tests::org;
use helm_types::{AutonomyLevel, Constraint, ConstraintSource, DecisionOption, Reversibility};
use helm_world::{CapitalState, SnapshotPatch, WorldModelSnapshot};

fn runway_rule() -> Vec<Constraint> {
    vec![Constraint::hard(ConstraintSource::NorthStar, "Keep at least six months of runway")]
}

fn risky_options() -> Vec<DecisionOption> {
    vec![
        DecisionOption::new("Hire a sales team", 0.8, 0.4, 0.6, Reversibility::Partial),
        DecisionOption::new("Open a second office", 0.6, 0.5, 0.5, Reversibility::None),
        DecisionOption::new("Buy ad inventory", 0.5, 0.35, 0.7, Reversibility::Full),
    ]
}

#[tokio::test]
async fn short_runway_blocks_reasoning_and_escalates_decision() {
    let snapshot = WorldModelSnapshot::create(
        org(),
        SnapshotPatch::new().capital(CapitalState {
            runway_months: 4.0,
            ..CapitalState::default()
        }),
    );
    let constraints = runway_rule();

    let chain = ReasoningEngine::default().reason("how do we extend runway?", &[], &snapshot, &constraints, &[]);
    assert!(matches!(chain.verdict, Verdict::Blocked { .. }));
    assert_eq!(chain.violations().len(), 1);
    assert_eq!(chain.alternative_conclusions.len(), 3);

    let record = DecisionEngine::default().decide(DecisionRequest {
        agent_id: "cfo-agent".into(),
        organization_id: org(),
        inference: chain,
        options: risky_options(),
        constraints,
        autonomy_ceiling: AutonomyLevel::Autonomous,
    });

    assert!(record.escalated);
    assert_eq!(record.selected_option.action, ESCALATION_ACTION);
    assert_eq!(record.selected_option.probability, 1.0);
    assert_eq!(record.selected_option.upside, 0.0);
    assert_eq!(record.selected_option.downside, 0.0);
    assert_eq!(record.selected_option.reversibility, Reversibility::Full);
    assert_eq!(record.autonomy_level, AutonomyLevel::Escalate);
    assert_eq!(record.context.excluded.len(), 3);
    assert!(record.reasoning.contains("escalating"));

    // Even an escalation leaves an auditable step behind.
    let orchestrator = ActionOrchestrator::default();
    let plan = orchestrator.plan(&record);
    assert_eq!(plan.steps.len(), 1);
    assert_eq!(plan.steps[0].intent, ActionIntent::DatabaseWrite);

    let result = orchestrator.execute(&plan, &SimulatedExecutor::new()).await;
    assert!(result.overall_success);
}

#[test]
fn structured_predicate_escalates_where_text_would_not() {
    let constraints = vec![Constraint::hard(ConstraintSource::Regulatory, "Only near-certain bets")
        .with_predicate(helm_types::ConstraintPredicate::MinProbability { bound: 0.95 })];

    let record = DecisionEngine::default().decide(helm_tests::request(
        risky_options(),
        constraints,
        AutonomyLevel::Autonomous,
    ));
    assert!(record.escalated);
}
