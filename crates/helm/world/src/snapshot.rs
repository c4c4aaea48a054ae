//! World-model snapshots: immutable values, replaced rather than edited.

use chrono::{DateTime, Utc};
use helm_types::{OrganizationId, SnapshotId};
use serde::{Deserialize, Serialize};

use crate::causal::CausalRelationship;
use crate::state::{
    BusinessState, CapitalState, ClientState, Domain, DomainState, EntityGraph, FounderState,
    MarketState, RiskState,
};

/// A point-in-time view of an organization's business state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldModelSnapshot {
    pub id: SnapshotId,
    pub organization_id: OrganizationId,
    pub timestamp: DateTime<Utc>,
    pub business: BusinessState,
    pub market: MarketState,
    pub client: ClientState,
    pub founder: FounderState,
    pub capital: CapitalState,
    pub risk: RiskState,
    pub entities: EntityGraph,
    pub causal_relationships: Vec<CausalRelationship>,
}

/// Domain-level replacements applied by [`WorldModelSnapshot::update`].
///
/// A `Some` field replaces that domain wholesale; there is no deep merge.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotPatch {
    pub business: Option<BusinessState>,
    pub market: Option<MarketState>,
    pub client: Option<ClientState>,
    pub founder: Option<FounderState>,
    pub capital: Option<CapitalState>,
    pub risk: Option<RiskState>,
    pub entities: Option<EntityGraph>,
    pub causal_relationships: Option<Vec<CausalRelationship>>,
}

impl SnapshotPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn business(mut self, state: BusinessState) -> Self {
        self.business = Some(state);
        self
    }

    pub fn market(mut self, state: MarketState) -> Self {
        self.market = Some(state);
        self
    }

    pub fn client(mut self, state: ClientState) -> Self {
        self.client = Some(state);
        self
    }

    pub fn founder(mut self, state: FounderState) -> Self {
        self.founder = Some(state);
        self
    }

    pub fn capital(mut self, state: CapitalState) -> Self {
        self.capital = Some(state);
        self
    }

    pub fn risk(mut self, state: RiskState) -> Self {
        self.risk = Some(state);
        self
    }

    pub fn entities(mut self, graph: EntityGraph) -> Self {
        self.entities = Some(graph);
        self
    }

    pub fn causal_relationships(mut self, edges: Vec<CausalRelationship>) -> Self {
        self.causal_relationships = Some(edges);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == SnapshotPatch::default()
    }
}

impl WorldModelSnapshot {
    /// Create a snapshot, filling every unspecified domain with its default.
    pub fn create(organization_id: OrganizationId, patch: SnapshotPatch) -> Self {
        Self {
            id: SnapshotId::generate(),
            organization_id,
            timestamp: Utc::now(),
            business: patch.business.unwrap_or_default(),
            market: patch.market.unwrap_or_default(),
            client: patch.client.unwrap_or_default(),
            founder: patch.founder.unwrap_or_default(),
            capital: patch.capital.unwrap_or_default(),
            risk: patch.risk.unwrap_or_default(),
            entities: patch.entities.unwrap_or_default(),
            causal_relationships: patch.causal_relationships.unwrap_or_default(),
        }
    }

    /// Derive a successor snapshot with the patched domains replaced.
    ///
    /// The successor gets a fresh id and timestamp; `self` is untouched.
    pub fn update(&self, patch: SnapshotPatch) -> Self {
        Self {
            id: SnapshotId::generate(),
            organization_id: self.organization_id.clone(),
            timestamp: Utc::now(),
            business: patch.business.unwrap_or_else(|| self.business.clone()),
            market: patch.market.unwrap_or_else(|| self.market.clone()),
            client: patch.client.unwrap_or_else(|| self.client.clone()),
            founder: patch.founder.unwrap_or_else(|| self.founder.clone()),
            capital: patch.capital.unwrap_or_else(|| self.capital.clone()),
            risk: patch.risk.unwrap_or_else(|| self.risk.clone()),
            entities: patch.entities.unwrap_or_else(|| self.entities.clone()),
            causal_relationships: patch
                .causal_relationships
                .unwrap_or_else(|| self.causal_relationships.clone()),
        }
    }

    /// Return one of the six domain states.
    pub fn query(&self, domain: Domain) -> DomainState {
        match domain {
            Domain::Business => DomainState::Business(self.business.clone()),
            Domain::Market => DomainState::Market(self.market.clone()),
            Domain::Client => DomainState::Client(self.client.clone()),
            Domain::Founder => DomainState::Founder(self.founder.clone()),
            Domain::Capital => DomainState::Capital(self.capital.clone()),
            Domain::Risk => DomainState::Risk(self.risk.clone()),
        }
    }
}
