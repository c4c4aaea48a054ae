use serde::{Deserialize, Serialize};

/// An atomic perceived fact, produced by upstream perception.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredSignal {
    /// Signal type, e.g. `risk_indicator` or `revenue_change`.
    #[serde(rename = "type")]
    pub signal_type: String,
    pub value: String,
    /// Perception confidence in [0, 1].
    pub confidence: f64,
}

impl StructuredSignal {
    pub fn new(signal_type: impl Into<String>, value: impl Into<String>, confidence: f64) -> Self {
        Self {
            signal_type: signal_type.into(),
            value: value.into(),
            confidence,
        }
    }
}
