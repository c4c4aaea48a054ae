//! The decision engine.
//!
//! ```text
//!   options ─> rank ─> hard-constraint filter ─┬─> viable? ── select best
//!                                              └─> none ──── escalate
//!                 │
//!                 └─> risk ─> opportunity cost ─> autonomy gate ─> DecisionRecord
//! ```

use chrono::Utc;
use helm_reasoning::InferenceChain;
use helm_types::{AutonomyLevel, Constraint, DecisionId, DecisionOption, OrganizationId, Reversibility};
use serde::{Deserialize, Serialize};

use crate::autonomy::{grant_autonomy, required_autonomy};
use crate::config::DecisionConfig;
use crate::constraints::filter_hard_constraints;
use crate::opportunity::analyze_opportunity_cost;
use crate::ranking::{rank_options, RankedOption};
use crate::record::{DecisionContext, DecisionOutcome, DecisionRecord};
use crate::risk::{assess_risk, RiskLevel};

/// Action text of the option synthesized when nothing survives filtering.
pub const ESCALATION_ACTION: &str = "Escalate to human decision-maker";

/// Input to [`DecisionEngine::decide`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionRequest {
    pub agent_id: String,
    pub organization_id: OrganizationId,
    pub inference: InferenceChain,
    pub options: Vec<DecisionOption>,
    pub constraints: Vec<Constraint>,
    /// Highest autonomy the caller allows, whatever the decision needs.
    pub autonomy_ceiling: AutonomyLevel,
}

/// Stateless decision engine.
#[derive(Debug, Clone, Default)]
pub struct DecisionEngine {
    config: DecisionConfig,
}

impl DecisionEngine {
    pub fn new(config: DecisionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecisionConfig {
        &self.config
    }

    pub fn rank_options(&self, options: &[DecisionOption]) -> Vec<RankedOption> {
        rank_options(options, &self.config.reversibility_multipliers)
    }

    /// Commit to one option.
    ///
    /// Never fails: when every option breaks a hard constraint (or none was
    /// offered), the record selects a synthesized escalation option at
    /// autonomy level 0.
    pub fn decide(&self, request: DecisionRequest) -> DecisionRecord {
        let ranked = self.rank_options(&request.options);
        let (viable, excluded) = filter_hard_constraints(
            ranked.clone(),
            &request.constraints,
            self.config.runway_max_downside,
        );

        let escalated = viable.is_empty();
        let (selected_option, risk, opportunity_cost, required, granted) = if escalated {
            let escalation = escalation_option();
            let escalation_ranked = self.rank_options(std::slice::from_ref(&escalation));
            let risk = assess_risk(&[&escalation], &request.constraints, &self.config);
            let opportunity_cost =
                analyze_opportunity_cost(&escalation_ranked, self.config.clear_winner_margin);

            tracing::warn!(
                organization = %request.organization_id,
                offered = request.options.len(),
                excluded = excluded.len(),
                "No viable option, escalating to a human"
            );
            (
                escalation,
                risk,
                opportunity_cost,
                AutonomyLevel::Escalate,
                AutonomyLevel::Escalate,
            )
        } else {
            let considered: Vec<&DecisionOption> = viable.iter().map(|r| &r.option).collect();
            let risk = assess_risk(&considered, &request.constraints, &self.config);
            let opportunity_cost = analyze_opportunity_cost(&viable, self.config.clear_winner_margin);
            let selected = viable[0].option.clone();
            let required = required_autonomy(risk.overall_risk, selected.reversibility);
            let granted = grant_autonomy(required, request.autonomy_ceiling);
            (selected, risk, opportunity_cost, required, granted)
        };

        let reasoning = explain(
            &request.inference,
            &selected_option,
            &ranked,
            excluded.len(),
            risk.overall_risk,
            granted,
            escalated,
        );

        let record = DecisionRecord {
            id: DecisionId::generate(),
            agent_id: request.agent_id,
            organization_id: request.organization_id,
            context: DecisionContext {
                inference: request.inference,
                options: request.options,
                ranked,
                excluded,
                constraints: request.constraints,
                risk,
                opportunity_cost,
            },
            selected_option,
            escalated,
            required_autonomy: required,
            autonomy_level: granted,
            reasoning,
            created_at: Utc::now(),
            outcome: None,
        };

        tracing::info!(
            decision_id = %record.id,
            organization = %record.organization_id,
            action = %record.selected_option.action,
            risk = %record.context.risk.overall_risk,
            autonomy = %record.autonomy_level,
            "Decision committed"
        );

        record
    }

    /// Attach an observed outcome to a decision, returning the new record.
    ///
    /// The expected value is the selected option's unadjusted EV.
    pub fn record_outcome(&self, record: &DecisionRecord, success: bool, actual_value: f64) -> DecisionRecord {
        let expected_value = record.selected_option.expected_value();
        let regret = (expected_value - actual_value).max(0.0);

        let mut learnings = Vec::new();
        if success {
            learnings.push(format!(
                "'{}' succeeded; the assumptions behind it held",
                record.selected_option.action
            ));
        } else {
            learnings.push(format!(
                "'{}' failed; revisit the assumptions behind it",
                record.selected_option.action
            ));
            if record.context.risk.overall_risk == RiskLevel::Low {
                learnings.push(
                    "Risk was rated low but the decision failed; risk assessment needs recalibration"
                        .to_string(),
                );
            }
        }

        if expected_value != 0.0 {
            let variance = (actual_value - expected_value).abs() / expected_value.abs();
            if variance > self.config.outcome_variance_threshold {
                learnings.push(format!(
                    "Actual value {:.2} deviated {:.0}% from expected {:.2}; revise probability and impact estimates",
                    actual_value,
                    variance * 100.0,
                    expected_value
                ));
            }
        }

        tracing::info!(
            decision_id = %record.id,
            success,
            regret,
            "Outcome recorded"
        );

        DecisionRecord {
            outcome: Some(DecisionOutcome {
                success,
                actual_value,
                expected_value,
                regret,
                learnings,
                recorded_at: Utc::now(),
            }),
            ..record.clone()
        }
    }
}

/// The option selected when nothing else is viable.
pub fn escalation_option() -> DecisionOption {
    DecisionOption::new(ESCALATION_ACTION, 0.0, 0.0, 1.0, Reversibility::Full)
        .with_expected_outcome("A human reviews the situation and chooses how to proceed")
}

fn explain(
    inference: &InferenceChain,
    selected: &DecisionOption,
    ranked: &[RankedOption],
    excluded: usize,
    risk: RiskLevel,
    autonomy: AutonomyLevel,
    escalated: bool,
) -> String {
    if escalated {
        return format!(
            "{} None of the {} options satisfied the hard constraints ({} excluded); escalating to a human.",
            inference.conclusion,
            ranked.len(),
            excluded
        );
    }

    let adjusted_ev = ranked
        .iter()
        .find(|r| r.option.id == selected.id)
        .map(|r| r.adjusted_ev)
        .unwrap_or_default();
    format!(
        "{} Selected '{}' (adjusted EV {:.3}, {} reversibility) from {} options, {} excluded by hard constraints. Overall risk {}; autonomy level {}.",
        inference.conclusion,
        selected.action,
        adjusted_ev,
        selected.reversibility,
        ranked.len(),
        excluded,
        risk,
        autonomy
    )
}
