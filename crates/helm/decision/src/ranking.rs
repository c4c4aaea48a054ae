//! Option ranking by reversibility-adjusted expected value.

use std::cmp::Ordering;

use helm_types::DecisionOption;
use serde::{Deserialize, Serialize};

use crate::config::ReversibilityTable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedOption {
    pub option: DecisionOption,
    /// `upside * p - downside * (1 - p)`.
    pub expected_value: f64,
    /// Expected value times the reversibility multiplier.
    pub adjusted_ev: f64,
}

/// Rank options best first.
///
/// Total order: adjusted EV descending, then reversibility (full before
/// partial before none), then option id ascending.
pub fn rank_options(options: &[DecisionOption], multipliers: &ReversibilityTable) -> Vec<RankedOption> {
    let mut ranked: Vec<RankedOption> = options
        .iter()
        .map(|option| {
            let expected_value = option.expected_value();
            RankedOption {
                option: option.clone(),
                expected_value,
                adjusted_ev: expected_value * multipliers.get(option.reversibility),
            }
        })
        .collect();

    ranked.sort_by(compare_ranked);
    ranked
}

fn compare_ranked(a: &RankedOption, b: &RankedOption) -> Ordering {
    b.adjusted_ev
        .total_cmp(&a.adjusted_ev)
        .then_with(|| a.option.reversibility.cmp(&b.option.reversibility))
        .then_with(|| a.option.id.cmp(&b.option.id))
}
