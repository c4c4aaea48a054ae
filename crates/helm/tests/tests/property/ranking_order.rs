//! Property tests: ranking is a deterministic total order.

use helm_decision::{rank_options, DecisionConfig};
use helm_types::{DecisionOption, Reversibility};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

pub fn arb_reversibility() -> impl Strategy<Value = Reversibility> {
    prop_oneof![
        Just(Reversibility::Full),
        Just(Reversibility::Partial),
        Just(Reversibility::None),
    ]
}

/// Options drawn from a coarse grid so that exact EV ties are common.
pub fn arb_option() -> impl Strategy<Value = DecisionOption> {
    (0u8..5, 0u8..5, 0u8..=4, arb_reversibility(), "[a-z]{1,4}").prop_map(
        |(up, down, p, reversibility, id)| {
            DecisionOption::new(
                format!("do {}", id),
                f64::from(up) / 4.0,
                f64::from(down) / 4.0,
                f64::from(p) / 4.0,
                reversibility,
            )
            .with_id(id)
        },
    )
}

fn multipliers() -> helm_decision::ReversibilityTable {
    DecisionConfig::default().reversibility_multipliers
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Adjusted EV never increases down the ranking; ties are broken by
    /// reversibility, then id.
    #[test]
    fn ranking_is_sorted_with_tie_break(options in prop::collection::vec(arb_option(), 0..12)) {
        let ranked = rank_options(&options, &multipliers());
        prop_assert_eq!(ranked.len(), options.len());

        for pair in ranked.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.adjusted_ev >= b.adjusted_ev);
            if a.adjusted_ev == b.adjusted_ev {
                prop_assert!(
                    (a.option.reversibility, &a.option.id) <= (b.option.reversibility, &b.option.id)
                );
            }
        }
    }

    /// The ranking does not depend on the order options arrive in.
    #[test]
    fn ranking_ignores_input_order(options in prop::collection::vec(arb_option(), 0..12)) {
        let mut reversed = options.clone();
        reversed.reverse();

        let forward: Vec<_> = rank_options(&options, &multipliers())
            .into_iter()
            .map(|r| r.option.id)
            .collect();
        let backward: Vec<_> = rank_options(&reversed, &multipliers())
            .into_iter()
            .map(|r| r.option.id)
            .collect();

        prop_assert_eq!(forward, backward);
    }
}
