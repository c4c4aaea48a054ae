//! Anomaly detection against an organization's snapshot history.

use serde::{Deserialize, Serialize};

use crate::config::WorldConfig;
use crate::snapshot::WorldModelSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyKind {
    RunwayDrop,
    RiskSpike,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldAnomaly {
    pub kind: AnomalyKind,
    pub description: String,
    pub current_value: f64,
    pub historical_mean: f64,
}

/// Detect anomalies with the default thresholds.
pub fn detect_anomalies(
    current: &WorldModelSnapshot,
    historical: &[WorldModelSnapshot],
) -> Vec<WorldAnomaly> {
    detect_anomalies_with(current, historical, &WorldConfig::default())
}

/// Compare `current` with the mean of `historical`.
///
/// Returns nothing until at least `config.min_history` snapshots exist.
pub fn detect_anomalies_with(
    current: &WorldModelSnapshot,
    historical: &[WorldModelSnapshot],
    config: &WorldConfig,
) -> Vec<WorldAnomaly> {
    if historical.len() < config.min_history {
        return Vec::new();
    }

    let count = historical.len() as f64;
    let mean_runway = historical.iter().map(|s| s.capital.runway_months).sum::<f64>() / count;
    let mean_risk = historical.iter().map(|s| s.risk.overall_risk).sum::<f64>() / count;

    let mut anomalies = Vec::new();

    let runway = current.capital.runway_months;
    if runway < mean_runway * config.runway_drop_ratio {
        anomalies.push(WorldAnomaly {
            kind: AnomalyKind::RunwayDrop,
            description: format!(
                "Runway dropped significantly: {:.1} months vs historical mean {:.1}",
                runway, mean_runway
            ),
            current_value: runway,
            historical_mean: mean_runway,
        });
    }

    let risk = current.risk.overall_risk;
    if risk > mean_risk * config.risk_spike_ratio {
        anomalies.push(WorldAnomaly {
            kind: AnomalyKind::RiskSpike,
            description: format!(
                "Risk increased significantly: {:.2} vs historical mean {:.2}",
                risk, mean_risk
            ),
            current_value: risk,
            historical_mean: mean_risk,
        });
    }

    for anomaly in &anomalies {
        tracing::warn!(
            organization = %current.organization_id,
            kind = ?anomaly.kind,
            "{}",
            anomaly.description
        );
    }

    anomalies
}
