//! # helm-types
//!
//! Shared vocabulary for the Helm decision-and-action pipeline.
//!
//! ```text
//!   signals + snapshot ──> Reasoning ──> InferenceChain
//!                                             │
//!                 DecisionOption[] ──> Decision ──> DecisionRecord
//!                                                        │
//!                                  Action Orchestrator <─┘
//! ```
//!
//! Every crate in the pipeline speaks in these types. They are plain
//! values: cloneable, serializable, and never mutated in place by the
//! engines that consume them.

#![deny(unsafe_code)]

pub mod autonomy;
pub mod constraint;
pub mod ids;
pub mod objective;
pub mod option;
pub mod signal;

pub use autonomy::AutonomyLevel;
pub use constraint::{Constraint, ConstraintKind, ConstraintPredicate, ConstraintSource};
pub use ids::{DecisionId, OptionId, OrganizationId, PlanId, SnapshotId, StepId};
pub use objective::{Objective, TimeHorizon};
pub use option::{DecisionOption, Reversibility};
pub use signal::StructuredSignal;

/// Sort constraints into evaluation order: hard before soft, then by source
/// priority (north star, regulatory, user, learned).
pub fn sort_constraints(constraints: &[Constraint]) -> Vec<Constraint> {
    let mut sorted = constraints.to_vec();
    sorted.sort_by_key(|c| (c.kind, c.source));
    sorted
}

/// Sort objectives by weight (heaviest first), then by time horizon
/// (immediate first).
pub fn sort_objectives(objectives: &[Objective]) -> Vec<Objective> {
    let mut sorted = objectives.to_vec();
    sorted.sort_by(|a, b| {
        b.weight
            .total_cmp(&a.weight)
            .then_with(|| a.time_horizon.cmp(&b.time_horizon))
    });
    sorted
}
