//! E2E: snapshots accumulate in the store, anomalies surface, and causal
//! edges drive simulation.

use helm_tests::org;
use helm_world::{
    compute_health_score, AnomalyKind, CapitalState, Domain, DomainState, InMemorySnapshotRepository, Intervention,
    RiskState, SnapshotPatch, WorldError, WorldModelStore,
};

fn capital(runway_months: f64) -> SnapshotPatch {
    SnapshotPatch::new().capital(CapitalState {
        runway_months,
        ..CapitalState::default()
    })
}

#[test]
fn runway_drop_is_detected_after_enough_history() {
    let store = WorldModelStore::new(InMemorySnapshotRepository::new());
    let mut current = store.create(org(), capital(10.0)).unwrap();
    for _ in 0..4 {
        current = store.apply_update(&current, capital(10.0)).unwrap();
    }
    assert!(store.anomalies(&current).unwrap().is_empty());

    let dropped = store.apply_update(&current, capital(6.0)).unwrap();
    let anomalies = store.current_anomalies(&org()).unwrap();

    assert_eq!(anomalies.len(), 1);
    assert_eq!(anomalies[0].kind, AnomalyKind::RunwayDrop);
    assert!(anomalies[0].description.starts_with("Runway dropped significantly"));
    assert_eq!(anomalies[0].historical_mean, 10.0);
    assert_eq!(anomalies[0].current_value, 6.0);

    // The predecessor is untouched.
    assert_eq!(current.capital.runway_months, 10.0);
    assert_ne!(current.id, dropped.id);
    assert_eq!(store.get(&current.id).unwrap(), current);
}

#[test]
fn unknown_organization_has_no_current_snapshot() {
    let store = WorldModelStore::new(InMemorySnapshotRepository::new());
    let err = store.current(&helm_types::OrganizationId::new("ghost")).unwrap_err();
    assert!(matches!(err, WorldError::NoSnapshotForOrganization(_)));
}

#[test]
fn causal_edges_drive_single_hop_simulation() {
    let store = WorldModelStore::new(InMemorySnapshotRepository::new());
    let base = store
        .create(
            org(),
            SnapshotPatch::new().risk(RiskState {
                overall_risk: 0.3,
                ..RiskState::default()
            }),
        )
        .unwrap();

    let model = base
        .add_causal_relationship("layoffs", "team_risk", 0.5, 24.0)
        .add_causal_relationship("team_risk", "runway_months", -0.2, 48.0)
        .add_causal_relationship("layoffs", "runway_months", 0.25, 720.0);

    let chains = model.find_causal_chain("layoffs", "runway_months", 3);
    assert_eq!(chains.len(), 2);
    assert!(chains.iter().all(|c| c.len() <= 3));

    let projected = model.simulate_future_state(&Intervention::new("layoffs", 0.4), 48.0);
    // Only the 24h edge fits the horizon; the runway effect needs a second hop.
    assert!((projected.risk.overall_risk - 0.5).abs() < 1e-9);
    assert_eq!(projected.capital.runway_months, model.capital.runway_months);

    let later = model.simulate_future_state(&Intervention::new("layoffs", 0.4), 1_000.0);
    assert!((later.capital.runway_months - (12.0 + 0.1 * 12.0)).abs() < 1e-9);

    match model.query(Domain::Risk) {
        DomainState::Risk(risk) => assert_eq!(risk.overall_risk, 0.3),
        other => panic!("unexpected domain {:?}", other.domain()),
    }

    let health = compute_health_score(&projected);
    assert!((0.0..=1.0).contains(&health.overall));
    assert!(health.risk < compute_health_score(&model).risk);
}
