use serde::{Deserialize, Serialize};

/// How soon an objective is expected to pay off. Variant order is urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeHorizon {
    Immediate,
    Short,
    Medium,
    Long,
}

/// A weighted target the organization is steering toward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Objective {
    /// Metric name, e.g. `revenue`, `runway`, `risk`.
    pub metric: String,
    pub weight: f64,
    pub target: f64,
    pub time_horizon: TimeHorizon,
}

impl Objective {
    pub fn new(metric: impl Into<String>, weight: f64, target: f64, time_horizon: TimeHorizon) -> Self {
        Self {
            metric: metric.into(),
            weight,
            target,
            time_horizon,
        }
    }
}
