//! Property tests: decisions respect hard constraints and autonomy bounds
//! for any option catalog.

use helm_decision::{effective_predicates, DecisionEngine, ESCALATION_ACTION};
use helm_tests::request;
use helm_types::{AutonomyLevel, Constraint, ConstraintPredicate, ConstraintSource};
use proptest::prelude::*;

use super::ranking_order::{arb_option, arb_reversibility};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn arb_ceiling() -> impl Strategy<Value = AutonomyLevel> {
    prop_oneof![
        Just(AutonomyLevel::Escalate),
        Just(AutonomyLevel::Assisted),
        Just(AutonomyLevel::Supervised),
        Just(AutonomyLevel::Autonomous),
    ]
}

fn arb_constraint() -> impl Strategy<Value = Constraint> {
    prop_oneof![
        Just(Constraint::hard(ConstraintSource::NorthStar, "protect runway")),
        Just(Constraint::hard(ConstraintSource::User, "protect our reputation")),
        Just(Constraint::soft(ConstraintSource::Learned, "protect runway")),
        (0u8..=4).prop_map(|b| Constraint::hard(ConstraintSource::Regulatory, "probability floor")
            .with_predicate(ConstraintPredicate::MinProbability { bound: f64::from(b) / 4.0 }))
            .boxed(),
        arb_reversibility().prop_map(|r| Constraint::hard(ConstraintSource::User, "reversibility ban")
            .with_predicate(ConstraintPredicate::ForbidReversibility { reversibility: r }))
            .boxed(),
    ]
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// The selected option satisfies every hard constraint, unless it is
    /// the synthesized escalation option.
    #[test]
    fn selection_never_violates_hard_constraints(
        options in prop::collection::vec(arb_option(), 0..8),
        constraints in prop::collection::vec(arb_constraint(), 0..4),
    ) {
        let engine = DecisionEngine::default();
        let record = engine.decide(request(options, constraints.clone(), AutonomyLevel::Autonomous));

        if record.escalated {
            prop_assert_eq!(record.selected_option.action.as_str(), ESCALATION_ACTION);
            prop_assert_eq!(record.autonomy_level, AutonomyLevel::Escalate);
        } else {
            for constraint in constraints.iter().filter(|c| c.is_hard()) {
                for predicate in effective_predicates(constraint, engine.config().runway_max_downside) {
                    prop_assert!(!predicate.violated_by(&record.selected_option));
                }
            }
        }
    }

    /// granted <= required <= 3 and granted <= ceiling.
    #[test]
    fn autonomy_is_bounded(
        options in prop::collection::vec(arb_option(), 0..8),
        constraints in prop::collection::vec(arb_constraint(), 0..3),
        ceiling in arb_ceiling(),
    ) {
        let record = DecisionEngine::default().decide(request(options, constraints, ceiling));

        prop_assert!(record.autonomy_level <= record.required_autonomy);
        prop_assert!(record.required_autonomy <= AutonomyLevel::Autonomous);
        prop_assert!(record.autonomy_level <= ceiling);
    }
}
