//! Shared fixtures for the Helm end-to-end and property tests.

use helm_decision::{DecisionEngine, DecisionRecord, DecisionRequest};
use helm_reasoning::{InferenceChain, ReasoningEngine};
use helm_types::{AutonomyLevel, Constraint, DecisionOption, OrganizationId, Reversibility};
use helm_world::{SnapshotPatch, WorldModelSnapshot};

pub fn org() -> OrganizationId {
    OrganizationId::new("acme")
}

/// A snapshot with every domain at its default.
pub fn default_snapshot() -> WorldModelSnapshot {
    WorldModelSnapshot::create(org(), SnapshotPatch::new())
}

pub fn inference(question: &str, constraints: &[Constraint]) -> InferenceChain {
    ReasoningEngine::default().reason(question, &[], &default_snapshot(), constraints, &[])
}

pub fn request(
    options: Vec<DecisionOption>,
    constraints: Vec<Constraint>,
    ceiling: AutonomyLevel,
) -> DecisionRequest {
    DecisionRequest {
        agent_id: "test-agent".into(),
        organization_id: org(),
        inference: inference("what should we do next?", &constraints),
        options,
        constraints,
        autonomy_ceiling: ceiling,
    }
}

/// Decide over a single option whose action text is `action`.
pub fn decide_action(action: &str) -> DecisionRecord {
    let option = DecisionOption::new(action, 0.4, 0.1, 0.7, Reversibility::Full);
    DecisionEngine::default().decide(request(vec![option], vec![], AutonomyLevel::Autonomous))
}

/// The two-option pricing decision.
pub fn pricing_options() -> Vec<DecisionOption> {
    vec![
        DecisionOption::new("Raise prices", 0.5, 0.1, 0.7, Reversibility::Partial).with_id("raise"),
        DecisionOption::new("Cut costs", 0.2, 0.05, 0.9, Reversibility::Full).with_id("cut"),
    ]
}
