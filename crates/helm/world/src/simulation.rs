//! Single-hop what-if simulation over the causal graph.
//!
//! Only edges leaving the intervened variable are applied. Effects of
//! effects are not propagated; chain several calls for multi-hop.

use serde::{Deserialize, Serialize};

use crate::snapshot::WorldModelSnapshot;

/// A hypothetical change to one named variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intervention {
    pub variable: String,
    pub change: f64,
}

impl Intervention {
    pub fn new(variable: impl Into<String>, change: f64) -> Self {
        Self {
            variable: variable.into(),
            change,
        }
    }
}

/// State variable an effect name resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EffectTarget {
    Revenue,
    Churn,
    Risk,
    Runway,
}

fn resolve_target(effect: &str) -> Option<EffectTarget> {
    let effect = effect.to_lowercase();
    if effect.contains("revenue") {
        Some(EffectTarget::Revenue)
    } else if effect.contains("churn") {
        Some(EffectTarget::Churn)
    } else if effect.contains("risk") {
        Some(EffectTarget::Risk)
    } else if effect.contains("runway") {
        Some(EffectTarget::Runway)
    } else {
        None
    }
}

impl WorldModelSnapshot {
    /// Project the state `horizon_hours` ahead under `intervention`.
    ///
    /// For every edge whose cause is the intervened variable and whose lag
    /// fits the horizon, `impact = change * strength` is applied to the
    /// effect's target:
    ///
    /// - revenue: `pipeline_value *= 1 + impact`
    /// - churn: `churn_rate += impact`, floored at 0
    /// - risk: `overall_risk += impact`, clamped to [0, 1]
    /// - runway: `runway_months += 12 * impact`
    ///
    /// The projection keeps this snapshot's id and timestamp: it is a
    /// hypothetical, never a successor.
    pub fn simulate_future_state(
        &self,
        intervention: &Intervention,
        horizon_hours: f64,
    ) -> WorldModelSnapshot {
        let mut projected = self.clone();

        let edges = self
            .causal_relationships
            .iter()
            .filter(|e| e.cause == intervention.variable && e.lag <= horizon_hours);

        for edge in edges {
            let impact = intervention.change * edge.strength;
            match resolve_target(&edge.effect) {
                Some(EffectTarget::Revenue) => {
                    projected.business.pipeline_value *= 1.0 + impact;
                }
                Some(EffectTarget::Churn) => {
                    projected.business.churn_rate = (projected.business.churn_rate + impact).max(0.0);
                }
                Some(EffectTarget::Risk) => {
                    projected.risk.overall_risk =
                        (projected.risk.overall_risk + impact).clamp(0.0, 1.0);
                }
                Some(EffectTarget::Runway) => {
                    projected.capital.runway_months += impact * 12.0;
                }
                None => {
                    tracing::debug!(effect = %edge.effect, "no state variable for effect; skipped");
                    continue;
                }
            }
            tracing::debug!(
                cause = %edge.cause,
                effect = %edge.effect,
                impact,
                "applied simulated effect"
            );
        }

        projected
    }
}
