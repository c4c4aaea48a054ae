//! # helm-decision
//!
//! Decision Engine: turns an [`InferenceChain`](helm_reasoning::InferenceChain)
//! and a catalog of candidate options into a single committed
//! [`DecisionRecord`].
//!
//! 1. Rank by reversibility-adjusted expected value.
//! 2. Drop options that break a hard constraint.
//! 3. Assess risk and opportunity cost over what survives.
//! 4. Gate autonomy: the option's needs, capped by the caller's ceiling.
//!
//! When nothing survives, the engine escalates to a human instead of
//! failing. Outcomes observed later feed back through
//! [`DecisionEngine::record_outcome`].

#![deny(unsafe_code)]

pub mod autonomy;
pub mod config;
pub mod constraints;
pub mod engine;
pub mod error;
pub mod opportunity;
pub mod ranking;
pub mod record;
pub mod repository;
pub mod risk;

pub use autonomy::{grant_autonomy, required_autonomy};
pub use config::{DecisionConfig, ReversibilityTable, RiskBuckets};
pub use constraints::{effective_predicates, filter_hard_constraints, ExcludedOption};
pub use engine::{escalation_option, DecisionEngine, DecisionRequest, ESCALATION_ACTION};
pub use error::{DecisionError, DecisionResult};
pub use opportunity::{analyze_opportunity_cost, OpportunityCostAnalysis};
pub use ranking::{rank_options, RankedOption};
pub use record::{DecisionContext, DecisionOutcome, DecisionRecord};
pub use repository::{DecisionRepository, InMemoryDecisionRepository};
pub use risk::{assess_risk, KillAction, KillTrigger, RiskAssessment, RiskFactor, RiskFactorType, RiskLevel};
