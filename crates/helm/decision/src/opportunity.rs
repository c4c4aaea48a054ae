use serde::{Deserialize, Serialize};

use crate::ranking::RankedOption;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityCostAnalysis {
    pub alternatives_considered: usize,
    /// Value given up by not taking the runner-up, on unadjusted EV.
    pub foregone_value: f64,
    pub confidence: f64,
    pub recommendation: String,
}

/// Opportunity cost of taking the first ranked option over the second.
///
/// Uses unadjusted expected value, so the reversibility premium that
/// ordered the options can leave a positive foregone value.
pub fn analyze_opportunity_cost(ranked: &[RankedOption], clear_winner_margin: f64) -> OpportunityCostAnalysis {
    let (best, runner_up) = match ranked {
        [best, runner_up, ..] => (best, runner_up),
        _ => {
            return OpportunityCostAnalysis {
                alternatives_considered: ranked.len(),
                foregone_value: 0.0,
                confidence: 1.0,
                recommendation: "No alternatives to compare; opportunity cost is zero".to_string(),
            }
        }
    };

    let foregone_value = (runner_up.expected_value - best.expected_value).max(0.0);
    let confidence = if ranked.len() > 2 { 0.8 } else { 0.9 };

    let clear_winner = best.expected_value > runner_up.expected_value * (1.0 + clear_winner_margin);
    let recommendation = if clear_winner {
        format!(
            "'{}' clearly outperforms '{}'; proceed",
            best.option.action, runner_up.option.action
        )
    } else {
        format!(
            "'{}' and '{}' are close; consider a small test of both before committing",
            best.option.action, runner_up.option.action
        )
    };

    OpportunityCostAnalysis {
        alternatives_considered: ranked.len(),
        foregone_value,
        confidence,
        recommendation,
    }
}
