//! E2E: decisions are persisted and their outcomes fed back once.

use helm_decision::{DecisionEngine, DecisionError, DecisionRepository, InMemoryDecisionRepository};
use helm_tests::{org, pricing_options, request};
use helm_types::AutonomyLevel;

#[test]
fn outcome_is_recorded_once_per_decision() {
    let engine = DecisionEngine::default();
    let repo = InMemoryDecisionRepository::new();

    let record = engine.decide(request(pricing_options(), vec![], AutonomyLevel::Autonomous));
    repo.save(record.clone()).unwrap();

    let observed = engine.record_outcome(&record, true, 0.35);
    let outcome = observed.outcome.clone().unwrap();
    assert!((outcome.expected_value - 0.32).abs() < 1e-9);
    assert_eq!(outcome.regret, 0.0);

    let stored = repo.record_outcome(&record.id, outcome.clone()).unwrap();
    assert_eq!(stored.outcome, Some(outcome.clone()));
    assert_eq!(repo.list_for_org(&org()).unwrap().len(), 1);

    let err = repo.record_outcome(&record.id, outcome).unwrap_err();
    assert!(matches!(err, DecisionError::OutcomeAlreadyRecorded(_)));
}

#[test]
fn disappointing_outcome_produces_learnings() {
    let engine = DecisionEngine::default();
    let record = engine.decide(request(pricing_options(), vec![], AutonomyLevel::Autonomous));

    let outcome = engine.record_outcome(&record, false, -0.2).outcome.unwrap();
    assert!((outcome.regret - 0.52).abs() < 1e-9);
    assert!(outcome.learnings.iter().any(|l| l.contains("failed")));
    assert!(outcome.learnings.iter().any(|l| l.contains("rated low")));
    assert!(outcome.learnings.iter().any(|l| l.contains("deviated")));
}
