use serde::{Deserialize, Serialize};

use crate::option::{DecisionOption, Reversibility};

/// Whether a constraint can veto an option outright.
///
/// Variant order is evaluation order: hard constraints are checked first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    Hard,
    Soft,
}

/// Where a constraint came from. Variant order is priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintSource {
    NorthStar,
    Regulatory,
    User,
    Learned,
}

/// Structured test an option must pass to satisfy a constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConstraintPredicate {
    /// Option downside must not exceed the bound.
    MaxDownside { bound: f64 },
    /// Option must not carry the given reversibility.
    ForbidReversibility { reversibility: Reversibility },
    /// Option success probability must be at least the bound.
    MinProbability { bound: f64 },
}

impl ConstraintPredicate {
    /// Returns true when the option violates this predicate.
    pub fn violated_by(&self, option: &DecisionOption) -> bool {
        match self {
            ConstraintPredicate::MaxDownside { bound } => option.downside > *bound,
            ConstraintPredicate::ForbidReversibility { reversibility } => {
                option.reversibility == *reversibility
            }
            ConstraintPredicate::MinProbability { bound } => option.probability < *bound,
        }
    }
}

/// A rule bounding which decisions are acceptable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    pub kind: ConstraintKind,
    pub source: ConstraintSource,
    /// Free-text statement of the rule.
    pub rule: String,
    /// Structured form of the rule, when the producer supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicate: Option<ConstraintPredicate>,
}

impl Constraint {
    pub fn hard(source: ConstraintSource, rule: impl Into<String>) -> Self {
        Self {
            kind: ConstraintKind::Hard,
            source,
            rule: rule.into(),
            predicate: None,
        }
    }

    pub fn soft(source: ConstraintSource, rule: impl Into<String>) -> Self {
        Self {
            kind: ConstraintKind::Soft,
            source,
            rule: rule.into(),
            predicate: None,
        }
    }

    pub fn with_predicate(mut self, predicate: ConstraintPredicate) -> Self {
        self.predicate = Some(predicate);
        self
    }

    pub fn is_hard(&self) -> bool {
        self.kind == ConstraintKind::Hard
    }

    /// Case-insensitive keyword test against the rule text.
    pub fn mentions(&self, keyword: &str) -> bool {
        self.rule.to_lowercase().contains(&keyword.to_lowercase())
    }
}
