//! End-to-end scenario run: reasoning, decision, planning and simulated
//! execution.

use helm_action::{ActionIntent, ActionOrchestrator, ActionPlan, ActionResult, SimulatedExecutor};
use helm_decision::{DecisionEngine, DecisionRecord, DecisionRepository, DecisionRequest, InMemoryDecisionRepository};
use helm_reasoning::{InferenceChain, ReasoningEngine};
use helm_types::AutonomyLevel;
use helm_world::{compute_health_score, HealthScore, InMemorySnapshotRepository, WorldAnomaly, WorldModelStore};
use serde::Serialize;

use crate::config::HelmConfig;
use crate::scenario::Scenario;

#[derive(Debug, Serialize)]
pub struct RunReport {
    pub health: HealthScore,
    pub anomalies: Vec<WorldAnomaly>,
    pub inference: InferenceChain,
    pub decision: DecisionRecord,
    pub plan: ActionPlan,
    pub result: ActionResult,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub organization_id: String,
    pub health: HealthScore,
    pub anomalies: Vec<WorldAnomaly>,
}

/// Overrides supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub ceiling: Option<AutonomyLevel>,
    pub fail_intent: Option<ActionIntent>,
}

/// Store that keeps only what anomaly detection reads: the window plus the
/// current snapshot.
fn world_store(config: &HelmConfig) -> WorldModelStore<InMemorySnapshotRepository> {
    let retention = config.world.history_window + 1;
    WorldModelStore::new(InMemorySnapshotRepository::with_retention(retention)).with_config(config.world.clone())
}

pub async fn run(scenario: &Scenario, config: &HelmConfig, options: &RunOptions) -> anyhow::Result<RunReport> {
    let store = world_store(config);
    let snapshot = scenario.populate(&store)?;
    let anomalies = store.anomalies(&snapshot)?;
    let health = compute_health_score(&snapshot);

    let inference = ReasoningEngine::new(config.reasoning.clone()).reason(
        &scenario.question,
        &scenario.signals,
        &snapshot,
        &scenario.constraints,
        &scenario.objectives,
    );

    let decisions = InMemoryDecisionRepository::new();
    let decision = DecisionEngine::new(config.decision.clone()).decide(DecisionRequest {
        agent_id: scenario.agent_id.clone(),
        organization_id: scenario.organization(),
        inference: inference.clone(),
        options: scenario.options.clone(),
        constraints: scenario.constraints.clone(),
        autonomy_ceiling: options.ceiling.unwrap_or(scenario.autonomy_ceiling),
    });
    decisions.save(decision.clone())?;

    let orchestrator = ActionOrchestrator::new(config.orchestrator.clone());
    let plan = orchestrator.plan(&decision);

    let mut executor = SimulatedExecutor::new();
    if let Some(intent) = options.fail_intent {
        executor = executor.fail_intent(intent);
    }
    let result = orchestrator.execute(&plan, &executor).await;

    Ok(RunReport {
        health,
        anomalies,
        inference,
        decision,
        plan,
        result,
    })
}

pub fn health(scenario: &Scenario, config: &HelmConfig) -> anyhow::Result<HealthReport> {
    let store = world_store(config);
    let snapshot = scenario.populate(&store)?;

    Ok(HealthReport {
        organization_id: scenario.organization_id.clone(),
        health: compute_health_score(&snapshot),
        anomalies: store.anomalies(&snapshot)?,
    })
}
