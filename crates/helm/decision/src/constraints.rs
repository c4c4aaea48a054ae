//! Hard-constraint filtering.
//!
//! A constraint's structured predicate is used when present. Otherwise the
//! predicate is derived from the rule text by a fixed pattern fallback:
//!
//! - rule mentions "runway" → downside must not exceed the runway bound
//! - rule mentions "reputation" → option must not be irreversible
//!
//! Rules matching neither pattern and carrying no predicate cannot veto.

use helm_types::{Constraint, ConstraintPredicate, OptionId, Reversibility};
use serde::{Deserialize, Serialize};

use crate::ranking::RankedOption;

/// An option removed by hard constraints, with the rules it broke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExcludedOption {
    pub option_id: OptionId,
    pub action: String,
    pub violated_rules: Vec<String>,
}

/// Predicates a constraint enforces.
pub fn effective_predicates(constraint: &Constraint, runway_max_downside: f64) -> Vec<ConstraintPredicate> {
    if let Some(predicate) = &constraint.predicate {
        return vec![predicate.clone()];
    }

    let mut predicates = Vec::new();
    if constraint.mentions("runway") {
        predicates.push(ConstraintPredicate::MaxDownside {
            bound: runway_max_downside,
        });
    }
    if constraint.mentions("reputation") {
        predicates.push(ConstraintPredicate::ForbidReversibility {
            reversibility: Reversibility::None,
        });
    }
    predicates
}

/// Split ranked options into those passing every hard constraint and those
/// excluded. Ranking order is preserved.
pub fn filter_hard_constraints(
    ranked: Vec<RankedOption>,
    constraints: &[Constraint],
    runway_max_downside: f64,
) -> (Vec<RankedOption>, Vec<ExcludedOption>) {
    let hard: Vec<(&Constraint, Vec<ConstraintPredicate>)> = constraints
        .iter()
        .filter(|c| c.is_hard())
        .map(|c| (c, effective_predicates(c, runway_max_downside)))
        .collect();

    let mut viable = Vec::new();
    let mut excluded = Vec::new();
    for candidate in ranked {
        let violated_rules: Vec<String> = hard
            .iter()
            .filter(|(_, predicates)| predicates.iter().any(|p| p.violated_by(&candidate.option)))
            .map(|(c, _)| c.rule.clone())
            .collect();

        if violated_rules.is_empty() {
            viable.push(candidate);
        } else {
            tracing::debug!(
                option = %candidate.option.id,
                rules = ?violated_rules,
                "option excluded by hard constraints"
            );
            excluded.push(ExcludedOption {
                option_id: candidate.option.id.clone(),
                action: candidate.option.action.clone(),
                violated_rules,
            });
        }
    }

    (viable, excluded)
}
