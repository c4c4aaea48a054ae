//! Risk assessment over the options under consideration.
//!
//! Each option contributes two factors:
//!
//! | factor            | likelihood               | impact   |
//! |-------------------|--------------------------|----------|
//! | downside exposure | `1 - probability`        | downside |
//! | irreversibility   | by reversibility class   | 0.7      |
//!
//! The overall bucket comes from the mean of `likelihood * impact`.

use helm_types::{Constraint, DecisionOption, OptionId};
use serde::{Deserialize, Serialize};

use crate::config::DecisionConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactorType {
    DownsideExposure,
    Irreversibility,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub factor_type: RiskFactorType,
    pub option_id: OptionId,
    pub likelihood: f64,
    pub impact: f64,
    pub description: String,
}

impl RiskFactor {
    pub fn severity(&self) -> f64 {
        self.likelihood * self.impact
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KillAction {
    Stop,
}

/// Stop condition tied to one hard constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KillTrigger {
    pub condition: String,
    pub threshold: f64,
    pub action: KillAction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub overall_risk: RiskLevel,
    /// Mean factor severity the bucket was derived from.
    pub score: f64,
    pub factors: Vec<RiskFactor>,
    pub mitigations: Vec<String>,
    pub kill_triggers: Vec<KillTrigger>,
}

pub fn assess_risk(
    options: &[&DecisionOption],
    constraints: &[Constraint],
    config: &DecisionConfig,
) -> RiskAssessment {
    let mut factors = Vec::with_capacity(options.len() * 2);
    for option in options {
        factors.push(RiskFactor {
            factor_type: RiskFactorType::DownsideExposure,
            option_id: option.id.clone(),
            likelihood: 1.0 - option.probability,
            impact: option.downside,
            description: format!(
                "'{}' loses {:.2} with probability {:.2}",
                option.action,
                option.downside,
                1.0 - option.probability
            ),
        });
        factors.push(RiskFactor {
            factor_type: RiskFactorType::Irreversibility,
            option_id: option.id.clone(),
            likelihood: config.irreversibility_likelihood.get(option.reversibility),
            impact: config.irreversibility_impact,
            description: format!(
                "'{}' has {} reversibility",
                option.action, option.reversibility
            ),
        });
    }

    let score = if factors.is_empty() {
        0.0
    } else {
        factors.iter().map(RiskFactor::severity).sum::<f64>() / factors.len() as f64
    };

    let buckets = &config.risk_buckets;
    let overall_risk = if score < buckets.low_below {
        RiskLevel::Low
    } else if score < buckets.medium_below {
        RiskLevel::Medium
    } else if score < buckets.high_below {
        RiskLevel::High
    } else {
        RiskLevel::Critical
    };

    let mitigations = factors
        .iter()
        .filter(|f| f.severity() > config.mitigation_threshold)
        .map(mitigation_for)
        .collect();

    let kill_triggers = constraints
        .iter()
        .filter(|c| c.is_hard())
        .map(|c| KillTrigger {
            condition: c.rule.clone(),
            threshold: config.kill_trigger_threshold,
            action: KillAction::Stop,
        })
        .collect();

    RiskAssessment {
        overall_risk,
        score,
        factors,
        mitigations,
        kill_triggers,
    }
}

fn mitigation_for(factor: &RiskFactor) -> String {
    match factor.factor_type {
        RiskFactorType::DownsideExposure => format!(
            "Cap exposure on option {}: stage the rollout and set a loss limit",
            factor.option_id
        ),
        RiskFactorType::Irreversibility => format!(
            "Add a checkpoint before option {} commits: it cannot be fully undone",
            factor.option_id
        ),
    }
}
