//! Scenario files.
//!
//! A scenario is a TOML document describing one decision point:
//!
//! ```toml
//! organization_id = "acme"
//! question = "how do we grow revenue?"
//!
//! [[signals]]
//! type = "revenue_change"
//! value = "mrr flat for 3 months"
//! confidence = 0.8
//!
//! [snapshot.capital]
//! runway_months = 9.0
//!
//! [[options]]
//! action = "Raise prices"
//! upside = 0.5
//! downside = 0.1
//! probability = 0.7
//! reversibility = "partial"
//! ```
//!
//! `history` holds earlier states, oldest first; they are stored before
//! `snapshot` so anomaly detection has something to compare against. The
//! first stored snapshot is built from the oldest entry, so the stored
//! history is exactly what the file lists.

use std::path::Path;

use anyhow::Context;
use helm_types::{AutonomyLevel, Constraint, DecisionOption, Objective, OrganizationId, StructuredSignal};
use helm_world::{InMemorySnapshotRepository, SnapshotPatch, WorldModelSnapshot, WorldModelStore};
use serde::{Deserialize, Serialize};

fn default_organization() -> String {
    "default-org".to_string()
}

fn default_agent() -> String {
    "helm-cli".to_string()
}

fn default_ceiling() -> AutonomyLevel {
    AutonomyLevel::Autonomous
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default = "default_organization")]
    pub organization_id: String,
    #[serde(default = "default_agent")]
    pub agent_id: String,
    pub question: String,
    #[serde(default)]
    pub signals: Vec<StructuredSignal>,
    #[serde(default)]
    pub history: Vec<SnapshotPatch>,
    #[serde(default)]
    pub snapshot: SnapshotPatch,
    #[serde(default)]
    pub constraints: Vec<Constraint>,
    #[serde(default)]
    pub objectives: Vec<Objective>,
    #[serde(default)]
    pub options: Vec<DecisionOption>,
    #[serde(default = "default_ceiling")]
    pub autonomy_ceiling: AutonomyLevel,
}

impl Scenario {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("parsing scenario {}", path.display()))
    }

    pub fn parse(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn organization(&self) -> OrganizationId {
        OrganizationId::new(self.organization_id.clone())
    }

    /// Store the scenario's history and current state, returning the
    /// current snapshot.
    pub fn populate(
        &self,
        store: &WorldModelStore<InMemorySnapshotRepository>,
    ) -> anyhow::Result<WorldModelSnapshot> {
        let mut patches = self.history.iter().chain(std::iter::once(&self.snapshot));
        let first = patches.next().cloned().unwrap_or_default();

        let mut current = store.create(self.organization(), first)?;
        for patch in patches {
            current = store.apply_update(&current, patch.clone())?;
        }
        Ok(current)
    }
}
