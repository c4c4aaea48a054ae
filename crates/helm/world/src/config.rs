use serde::{Deserialize, Serialize};

/// Thresholds for world-model anomaly detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Minimum historical snapshots before anomalies are evaluated.
    pub min_history: usize,
    /// Runway below `ratio * historical mean` is anomalous.
    pub runway_drop_ratio: f64,
    /// Risk above `ratio * historical mean` is anomalous.
    pub risk_spike_ratio: f64,
    /// How many snapshots of history the store feeds into detection.
    pub history_window: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            min_history: 5,
            runway_drop_ratio: 0.7,
            risk_spike_ratio: 1.5,
            history_window: 30,
        }
    }
}
