//! Inference chain: the traceable output of the reasoning engine.

use chrono::{DateTime, Utc};
use helm_types::StructuredSignal;
use helm_world::DomainState;
use serde::{Deserialize, Serialize};

/// Fixed stages of the reasoning pipeline that produce steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasoningStage {
    EvidenceGathering,
    ConstraintCheck,
    ObjectiveEvaluation,
}

/// One item supporting a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Evidence {
    /// A perceived signal relevant to the question.
    Signal { signal: StructuredSignal },
    /// A slice of the world model relevant to the question.
    State { state: DomainState },
    /// A hard constraint the current state violates.
    ConstraintViolation { rule: String, detail: String },
    /// How well the current state meets one objective.
    ObjectiveAlignment { metric: String, weight: f64, alignment: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceStep {
    pub stage: ReasoningStage,
    pub premise: String,
    pub reasoning: String,
    pub evidence: Vec<Evidence>,
    pub confidence: f64,
}

/// Outcome of synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    /// Hard constraints are violated; acting is blocked.
    Blocked { violations: Vec<String> },
    /// Confidence is high enough to act.
    Proceed,
    /// Confidence is moderate; act only with review.
    Review,
}

impl Verdict {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Verdict::Blocked { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceChain {
    pub question: String,
    pub steps: Vec<InferenceStep>,
    pub verdict: Verdict,
    pub conclusion: String,
    /// Mean of the step confidences.
    pub confidence: f64,
    pub alternative_conclusions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl InferenceChain {
    pub fn step(&self, stage: ReasoningStage) -> Option<&InferenceStep> {
        self.steps.iter().find(|s| s.stage == stage)
    }

    /// Constraint violations recorded by the chain, if any.
    pub fn violations(&self) -> &[String] {
        match &self.verdict {
            Verdict::Blocked { violations } => violations,
            _ => &[],
        }
    }
}
