//! Property tests: causal search terminates on cyclic graphs, zero-change
//! simulation is the identity, and health stays in [0, 1].

use std::collections::HashSet;

use helm_tests::{default_snapshot, org};
use helm_world::{
    compute_health_score, BusinessState, CapitalState, CausalRelationship, ClientHealth, ClientState, FounderState,
    Intervention, RevenueStream, RiskState, SnapshotPatch, WorldModelSnapshot,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const NODES: [&str; 6] = ["price", "revenue", "churn", "risk", "runway", "hiring"];

fn arb_edge() -> impl Strategy<Value = CausalRelationship> {
    (0..NODES.len(), 0..NODES.len(), -1.0f64..1.0, 0.0f64..200.0)
        .prop_map(|(c, e, strength, lag)| CausalRelationship::new(NODES[c], NODES[e], strength, lag))
}

fn arb_graph() -> impl Strategy<Value = WorldModelSnapshot> {
    prop::collection::vec(arb_edge(), 0..20).prop_map(|edges| {
        WorldModelSnapshot::create(org(), SnapshotPatch::new().causal_relationships(edges))
    })
}

fn unit() -> std::ops::RangeInclusive<f64> {
    0.0..=1.0
}

fn arb_snapshot() -> impl Strategy<Value = WorldModelSnapshot> {
    let business = (
        prop::collection::vec(-0.5f64..0.5, 0..4),
        unit(),
    )
        .prop_map(|(growth, churn_rate)| BusinessState {
            revenue_streams: growth
                .into_iter()
                .enumerate()
                .map(|(i, growth_rate)| RevenueStream {
                    name: format!("stream-{}", i),
                    mrr: 1_000.0,
                    growth_rate,
                })
                .collect(),
            churn_rate,
            ..BusinessState::default()
        });
    let capital = (0.0f64..48.0, unit()).prop_map(|(runway_months, reserve_ratio)| CapitalState {
        runway_months,
        reserve_ratio,
        ..CapitalState::default()
    });
    let founder = (unit(), unit(), unit(), unit()).prop_map(|(energy, focus, burnout_risk, decision_fatigue)| {
        FounderState {
            energy,
            focus,
            burnout_risk,
            decision_fatigue,
        }
    });
    let client = (prop::collection::vec(unit(), 0..5), 0u32..10).prop_map(|(health, at_risk_count)| ClientState {
        clients: health
            .into_iter()
            .enumerate()
            .map(|(i, health)| ClientHealth {
                client_id: format!("c{}", i),
                name: format!("Client {}", i),
                health,
            })
            .collect(),
        at_risk_count,
    });
    let risk = unit().prop_map(|overall_risk| RiskState {
        overall_risk,
        ..RiskState::default()
    });

    (business, capital, founder, client, risk, prop::collection::vec(arb_edge(), 0..8)).prop_map(
        |(business, capital, founder, client, risk, edges)| {
            WorldModelSnapshot::create(
                org(),
                SnapshotPatch::new()
                    .business(business)
                    .capital(capital)
                    .founder(founder)
                    .client(client)
                    .risk(risk)
                    .causal_relationships(edges),
            )
        },
    )
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Every chain respects max_depth, starts at `from`, ends at `to`, is
    /// connected, and never enters the same effect node twice.
    #[test]
    fn causal_chains_are_bounded_and_acyclic(
        model in arb_graph(),
        from in 0..NODES.len(),
        to in 0..NODES.len(),
        max_depth in 0usize..5,
    ) {
        let (from, to) = (NODES[from], NODES[to]);
        for chain in model.find_causal_chain(from, to, max_depth) {
            prop_assert!(!chain.is_empty());
            prop_assert!(chain.len() <= max_depth);
            prop_assert_eq!(chain[0].cause.as_str(), from);
            prop_assert_eq!(chain[chain.len() - 1].effect.as_str(), to);

            let mut entered: HashSet<&str> = HashSet::new();
            for pair in chain.windows(2) {
                prop_assert_eq!(&pair[0].effect, &pair[1].cause);
            }
            for edge in &chain {
                prop_assert!(entered.insert(edge.effect.as_str()));
            }
        }
    }

    /// A zero-size intervention changes nothing.
    #[test]
    fn zero_change_simulation_is_identity(
        model in arb_snapshot(),
        variable in 0..NODES.len(),
        horizon in 0.0f64..500.0,
    ) {
        let projected = model.simulate_future_state(&Intervention::new(NODES[variable], 0.0), horizon);
        prop_assert_eq!(projected, model);
    }

    #[test]
    fn health_score_is_in_unit_range(model in arb_snapshot()) {
        let health = compute_health_score(&model);
        for score in [health.overall, health.business, health.capital, health.risk, health.founder, health.client] {
            prop_assert!((0.0..=1.0).contains(&score), "score out of range: {}", score);
        }
    }
}

#[test]
fn default_snapshot_health_in_range() {
    let health = compute_health_score(&default_snapshot());
    assert!((0.0..=1.0).contains(&health.overall));
}
