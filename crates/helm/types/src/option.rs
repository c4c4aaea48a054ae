use serde::{Deserialize, Serialize};

use crate::ids::OptionId;

/// How easily an action's effects can be undone.
///
/// Variant order is preference order: fully reversible actions rank first
/// when everything else is equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reversibility {
    Full,
    Partial,
    None,
}

impl std::fmt::Display for Reversibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reversibility::Full => write!(f, "full"),
            Reversibility::Partial => write!(f, "partial"),
            Reversibility::None => write!(f, "none"),
        }
    }
}

/// A candidate course of action supplied by external option generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionOption {
    #[serde(default = "OptionId::generate")]
    pub id: OptionId,
    pub action: String,
    #[serde(default)]
    pub expected_outcome: String,
    /// Probability of the upside materializing, in [0, 1].
    pub probability: f64,
    pub upside: f64,
    pub downside: f64,
    pub reversibility: Reversibility,
    /// Time until results are observable, in hours.
    #[serde(default)]
    pub time_to_result: f64,
}

impl DecisionOption {
    pub fn new(
        action: impl Into<String>,
        upside: f64,
        downside: f64,
        probability: f64,
        reversibility: Reversibility,
    ) -> Self {
        Self {
            id: OptionId::generate(),
            action: action.into(),
            expected_outcome: String::new(),
            probability,
            upside,
            downside,
            reversibility,
            time_to_result: 0.0,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = OptionId::new(id);
        self
    }

    pub fn with_expected_outcome(mut self, outcome: impl Into<String>) -> Self {
        self.expected_outcome = outcome.into();
        self
    }

    pub fn with_time_to_result(mut self, hours: f64) -> Self {
        self.time_to_result = hours;
        self
    }

    /// Unadjusted expected value: `upside * p - downside * (1 - p)`.
    pub fn expected_value(&self) -> f64 {
        self.upside * self.probability - self.downside * (1.0 - self.probability)
    }
}
