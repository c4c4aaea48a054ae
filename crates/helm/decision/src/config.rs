use helm_types::Reversibility;
use serde::{Deserialize, Serialize};

/// One value per reversibility class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReversibilityTable {
    pub full: f64,
    pub partial: f64,
    pub none: f64,
}

impl ReversibilityTable {
    pub fn get(&self, reversibility: Reversibility) -> f64 {
        match reversibility {
            Reversibility::Full => self.full,
            Reversibility::Partial => self.partial,
            Reversibility::None => self.none,
        }
    }
}

/// Upper bounds (exclusive) of the low, medium and high risk buckets.
/// Anything at or above `high_below` is critical.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskBuckets {
    pub low_below: f64,
    pub medium_below: f64,
    pub high_below: f64,
}

/// Configuration for the decision engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionConfig {
    /// Multiplier applied to expected value by reversibility.
    pub reversibility_multipliers: ReversibilityTable,
    /// Likelihood of the irreversibility risk factor by reversibility.
    pub irreversibility_likelihood: ReversibilityTable,
    /// Impact of the irreversibility risk factor.
    pub irreversibility_impact: f64,
    pub risk_buckets: RiskBuckets,
    /// Factors with `likelihood * impact` above this get a mitigation.
    pub mitigation_threshold: f64,
    pub kill_trigger_threshold: f64,
    /// Downside bound derived for hard rules that mention runway.
    pub runway_max_downside: f64,
    /// Best EV must beat the runner-up by this fraction to be a clear winner.
    pub clear_winner_margin: f64,
    /// Relative gap between expected and actual value flagged in learnings.
    pub outcome_variance_threshold: f64,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            reversibility_multipliers: ReversibilityTable {
                full: 1.2,
                partial: 1.0,
                none: 0.8,
            },
            irreversibility_likelihood: ReversibilityTable {
                full: 0.1,
                partial: 0.4,
                none: 0.8,
            },
            irreversibility_impact: 0.7,
            risk_buckets: RiskBuckets {
                low_below: 0.3,
                medium_below: 0.5,
                high_below: 0.7,
            },
            mitigation_threshold: 0.3,
            kill_trigger_threshold: 0.9,
            runway_max_downside: 0.3,
            clear_winner_margin: 0.2,
            outcome_variance_threshold: 0.3,
        }
    }
}
