use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Configuration for the reasoning engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReasoningConfig {
    /// Signal type → keyword that must appear in the question for the
    /// signal to count as evidence. Unlisted types never match.
    pub signal_keywords: BTreeMap<String, String>,
    /// Evidence-gathering confidence when any evidence was found.
    pub evidence_found_confidence: f64,
    /// Evidence-gathering confidence when nothing relevant was found.
    pub no_evidence_confidence: f64,
    /// Constraint-check confidence with no violations.
    pub constraints_clear_confidence: f64,
    /// Constraint-check confidence with at least one violation.
    pub constraints_violated_confidence: f64,
    /// Hard "runway" constraints are violated below this many months.
    pub min_runway_months: f64,
    /// Hard "risk" constraints are violated above this overall risk.
    pub max_overall_risk: f64,
    /// Mean step confidence above which the chain concludes "proceed".
    pub high_confidence_threshold: f64,
    /// Alignment assumed for objectives with no known metric.
    pub neutral_alignment: f64,
}

impl Default for ReasoningConfig {
    fn default() -> Self {
        let signal_keywords = [
            ("risk_indicator", "risk"),
            ("revenue_change", "revenue"),
            ("pipeline_update", "pipeline"),
            ("cash_flow", "cash"),
            ("runway_alert", "runway"),
            ("churn_signal", "churn"),
            ("client_feedback", "client"),
            ("market_shift", "market"),
            ("competitor_move", "competitor"),
            ("founder_state", "founder"),
        ]
        .into_iter()
        .map(|(t, k)| (t.to_string(), k.to_string()))
        .collect();

        Self {
            signal_keywords,
            evidence_found_confidence: 0.8,
            no_evidence_confidence: 0.3,
            constraints_clear_confidence: 0.95,
            constraints_violated_confidence: 0.6,
            min_runway_months: 6.0,
            max_overall_risk: 0.7,
            high_confidence_threshold: 0.8,
            neutral_alignment: 0.5,
        }
    }
}
