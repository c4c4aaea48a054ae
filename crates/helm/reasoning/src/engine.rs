//! The four-stage reasoning pipeline.
//!
//! 1. Evidence gathering: signals and world-state slices relevant to the question
//! 2. Constraint check: canned predicates over hard constraints
//! 3. Objective evaluation: weighted alignment of the state with objectives
//! 4. Synthesis: verdict, conclusion and alternatives
//!
//! The engine never fails. Missing evidence, constraints or objectives
//! lower the confidence of the chain instead.

use chrono::Utc;
use helm_types::{sort_constraints, sort_objectives, Constraint, Objective, StructuredSignal};
use helm_world::{Domain, WorldModelSnapshot};

use crate::chain::{Evidence, InferenceChain, InferenceStep, ReasoningStage, Verdict};
use crate::config::ReasoningConfig;

/// Question tokens that pull a world-state slice into the evidence.
const STATE_TRIGGERS: [(&[&str], Domain); 3] = [
    (&["money", "revenue"], Domain::Business),
    (&["risk", "danger"], Domain::Risk),
    (&["runway", "cash"], Domain::Capital),
];

/// Stateless reasoning engine. Safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct ReasoningEngine {
    config: ReasoningConfig,
}

impl ReasoningEngine {
    pub fn new(config: ReasoningConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReasoningConfig {
        &self.config
    }

    /// Reason about `question` given perceived signals and the world model.
    pub fn reason(
        &self,
        question: &str,
        signals: &[StructuredSignal],
        snapshot: &WorldModelSnapshot,
        constraints: &[Constraint],
        objectives: &[Objective],
    ) -> InferenceChain {
        let evidence_step = self.gather_evidence(question, signals, snapshot);
        let (constraint_step, violations) = self.check_constraints(snapshot, constraints);
        let objective_step = self.evaluate_objectives(snapshot, objectives);

        let steps = vec![evidence_step, constraint_step, objective_step];
        let confidence = steps.iter().map(|s| s.confidence).sum::<f64>() / steps.len() as f64;

        let (verdict, conclusion, alternative_conclusions) = self.synthesize(violations, confidence);

        tracing::info!(
            organization = %snapshot.organization_id,
            confidence,
            blocked = verdict.is_blocked(),
            "Inference chain complete"
        );

        InferenceChain {
            question: question.to_string(),
            steps,
            verdict,
            conclusion,
            confidence,
            alternative_conclusions,
            created_at: Utc::now(),
        }
    }

    // ── Stage 1 ──────────────────────────────────────────────────────

    fn gather_evidence(
        &self,
        question: &str,
        signals: &[StructuredSignal],
        snapshot: &WorldModelSnapshot,
    ) -> InferenceStep {
        let question_lower = question.to_lowercase();
        let mut evidence = Vec::new();

        let relevant_signals = signals.iter().filter(|signal| {
            self.config
                .signal_keywords
                .get(&signal.signal_type)
                .is_some_and(|keyword| question_lower.contains(keyword.as_str()))
        });
        let mut signal_count = 0;
        for signal in relevant_signals {
            evidence.push(Evidence::Signal {
                signal: signal.clone(),
            });
            signal_count += 1;
        }

        let mut slice_count = 0;
        for (tokens, domain) in STATE_TRIGGERS {
            if tokens.iter().any(|t| question_lower.contains(t)) {
                evidence.push(Evidence::State {
                    state: snapshot.query(domain),
                });
                slice_count += 1;
            }
        }

        let confidence = if evidence.is_empty() {
            self.config.no_evidence_confidence
        } else {
            self.config.evidence_found_confidence
        };

        tracing::debug!(signal_count, slice_count, confidence, "evidence gathered");

        InferenceStep {
            stage: ReasoningStage::EvidenceGathering,
            premise: format!("Question: {}", question),
            reasoning: format!(
                "Found {} relevant signal(s) and {} world-state slice(s)",
                signal_count, slice_count
            ),
            evidence,
            confidence,
        }
    }

    // ── Stage 2 ──────────────────────────────────────────────────────

    fn check_constraints(
        &self,
        snapshot: &WorldModelSnapshot,
        constraints: &[Constraint],
    ) -> (InferenceStep, Vec<String>) {
        let hard: Vec<Constraint> = sort_constraints(constraints)
            .into_iter()
            .filter(Constraint::is_hard)
            .collect();

        let runway = snapshot.capital.runway_months;
        let risk = snapshot.risk.overall_risk;

        let mut evidence = Vec::new();
        let mut violations = Vec::new();
        for constraint in &hard {
            if constraint.mentions("runway") && runway < self.config.min_runway_months {
                let detail = format!(
                    "Runway constraint violated: {:.1} months remaining (minimum {:.1})",
                    runway, self.config.min_runway_months
                );
                evidence.push(Evidence::ConstraintViolation {
                    rule: constraint.rule.clone(),
                    detail: detail.clone(),
                });
                violations.push(detail);
            }
            if constraint.mentions("risk") && risk > self.config.max_overall_risk {
                let detail = format!(
                    "Risk constraint violated: overall risk {:.2} exceeds {:.2}",
                    risk, self.config.max_overall_risk
                );
                evidence.push(Evidence::ConstraintViolation {
                    rule: constraint.rule.clone(),
                    detail: detail.clone(),
                });
                violations.push(detail);
            }
        }

        let confidence = if violations.is_empty() {
            self.config.constraints_clear_confidence
        } else {
            self.config.constraints_violated_confidence
        };

        if !violations.is_empty() {
            tracing::warn!(count = violations.len(), "hard constraints violated");
        }

        let step = InferenceStep {
            stage: ReasoningStage::ConstraintCheck,
            premise: format!("{} hard constraint(s) apply", hard.len()),
            reasoning: if violations.is_empty() {
                "Current state satisfies all hard constraints".to_string()
            } else {
                format!("{} hard constraint violation(s) found", violations.len())
            },
            evidence,
            confidence,
        };
        (step, violations)
    }

    // ── Stage 3 ──────────────────────────────────────────────────────

    fn evaluate_objectives(
        &self,
        snapshot: &WorldModelSnapshot,
        objectives: &[Objective],
    ) -> InferenceStep {
        let sorted = sort_objectives(objectives);

        let mut evidence = Vec::with_capacity(sorted.len());
        let mut weighted = 0.0;
        let mut total_weight = 0.0;
        for objective in &sorted {
            let alignment = self.alignment(snapshot, objective);
            weighted += objective.weight * alignment;
            total_weight += objective.weight;
            evidence.push(Evidence::ObjectiveAlignment {
                metric: objective.metric.clone(),
                weight: objective.weight,
                alignment,
            });
        }

        let confidence = if total_weight > 0.0 {
            weighted / total_weight
        } else {
            self.config.neutral_alignment
        };

        InferenceStep {
            stage: ReasoningStage::ObjectiveEvaluation,
            premise: format!("{} objective(s) weighed", sorted.len()),
            reasoning: format!("Weighted objective alignment is {:.2}", confidence),
            evidence,
            confidence,
        }
    }

    fn alignment(&self, snapshot: &WorldModelSnapshot, objective: &Objective) -> f64 {
        let metric = objective.metric.to_lowercase();
        if metric.contains("revenue") {
            ratio_to_target(snapshot.business.current_mrr, objective.target)
        } else if metric.contains("runway") {
            ratio_to_target(snapshot.capital.runway_months, objective.target)
        } else if metric.contains("risk") {
            (1.0 - snapshot.risk.overall_risk).clamp(0.0, 1.0)
        } else {
            self.config.neutral_alignment
        }
    }

    // ── Stage 4 ──────────────────────────────────────────────────────

    fn synthesize(&self, violations: Vec<String>, confidence: f64) -> (Verdict, String, Vec<String>) {
        if !violations.is_empty() {
            let conclusion = format!(
                "Action blocked by hard constraints: {}",
                violations.join("; ")
            );
            let alternatives = vec![
                "Resolve the violated constraints before committing to any action".to_string(),
                "Escalate to a human decision-maker with the violation details".to_string(),
                "Pursue only fully reversible, low-downside options until constraints recover"
                    .to_string(),
            ];
            return (Verdict::Blocked { violations }, conclusion, alternatives);
        }

        if confidence > self.config.high_confidence_threshold {
            (
                Verdict::Proceed,
                format!(
                    "High confidence ({:.2}): proceed with the best-ranked option",
                    confidence
                ),
                Vec::new(),
            )
        } else {
            (
                Verdict::Review,
                format!(
                    "Moderate confidence ({:.2}): proceed only with human review",
                    confidence
                ),
                vec![
                    "Escalate to a human decision-maker for approval".to_string(),
                    "Gather more evidence before committing".to_string(),
                ],
            )
        }
    }
}

/// `current / target` capped at 1; a non-positive target is always met.
fn ratio_to_target(current: f64, target: f64) -> f64 {
    if target <= 0.0 {
        1.0
    } else {
        (current / target).clamp(0.0, 1.0)
    }
}
