//! Decision records and outcomes.

use chrono::{DateTime, Utc};
use helm_reasoning::InferenceChain;
use helm_types::{AutonomyLevel, Constraint, DecisionId, DecisionOption, OrganizationId};
use serde::{Deserialize, Serialize};

use crate::constraints::ExcludedOption;
use crate::opportunity::OpportunityCostAnalysis;
use crate::ranking::RankedOption;
use crate::risk::RiskAssessment;

/// Everything the engine saw and derived while deciding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionContext {
    pub inference: InferenceChain,
    pub options: Vec<DecisionOption>,
    /// Options in ranked order, best first, before constraint filtering.
    pub ranked: Vec<RankedOption>,
    pub excluded: Vec<ExcludedOption>,
    pub constraints: Vec<Constraint>,
    pub risk: RiskAssessment,
    pub opportunity_cost: OpportunityCostAnalysis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionOutcome {
    pub success: bool,
    pub actual_value: f64,
    pub expected_value: f64,
    /// `max(0, expected - actual)`.
    pub regret: f64,
    pub learnings: Vec<String>,
    pub recorded_at: DateTime<Utc>,
}

/// A committed decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub id: DecisionId,
    pub agent_id: String,
    pub organization_id: OrganizationId,
    pub context: DecisionContext,
    pub selected_option: DecisionOption,
    /// True when no option survived and the escalation option was selected.
    pub escalated: bool,
    pub required_autonomy: AutonomyLevel,
    /// Granted autonomy: never above `required_autonomy` or the caller's ceiling.
    pub autonomy_level: AutonomyLevel,
    pub reasoning: String,
    pub created_at: DateTime<Utc>,
    pub outcome: Option<DecisionOutcome>,
}

impl DecisionRecord {
    pub fn has_outcome(&self) -> bool {
        self.outcome.is_some()
    }
}
