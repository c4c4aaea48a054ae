//! # helm-world
//!
//! World Model Store: immutable, time-indexed snapshots of six business
//! domains plus a directed causal graph between named state variables.
//!
//! ```text
//!   SnapshotPatch ──> WorldModelSnapshot::update ──> new snapshot
//!                                                        │
//!                                      SnapshotRepository (history)
//!                                                        │
//!            query / health / causal chains / simulation / anomalies
//! ```
//!
//! Snapshots are values. Nothing in this crate edits one in place: updates,
//! added causal edges and simulations all return a new snapshot.
//!
//! ## Quick Start
//!
//! ```rust
//! use helm_types::OrganizationId;
//! use helm_world::{compute_health_score, Intervention, SnapshotPatch, WorldModelSnapshot};
//!
//! let model = WorldModelSnapshot::create(OrganizationId::new("acme"), SnapshotPatch::new())
//!     .add_causal_relationship("price", "revenue", 0.5, 24.0);
//!
//! let projected = model.simulate_future_state(&Intervention::new("price", 0.1), 48.0);
//! assert!(compute_health_score(&projected).overall <= 1.0);
//! ```

#![deny(unsafe_code)]

pub mod anomaly;
pub mod causal;
pub mod config;
pub mod error;
pub mod health;
pub mod repository;
pub mod simulation;
pub mod snapshot;
pub mod state;
pub mod store;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use anomaly::{detect_anomalies, detect_anomalies_with, AnomalyKind, WorldAnomaly};
pub use causal::{
    chain_lag, chain_strength, CausalChain, CausalRelationship, DEFAULT_CAUSAL_CONFIDENCE,
    DEFAULT_MAX_CHAIN_DEPTH,
};
pub use config::WorldConfig;
pub use error::{WorldError, WorldResult};
pub use health::{compute_health_score, HealthScore};
pub use repository::{InMemorySnapshotRepository, SnapshotRepository};
pub use simulation::Intervention;
pub use snapshot::{SnapshotPatch, WorldModelSnapshot};
pub use state::{
    BusinessState, CapitalState, ClientHealth, ClientState, Domain, DomainState, Entity,
    EntityGraph, EntityRelation, FounderState, MarketState, RevenueStream, RiskState,
};
pub use store::WorldModelStore;
