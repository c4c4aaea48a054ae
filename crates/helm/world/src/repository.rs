//! Snapshot persistence.
//!
//! Storage is injected through [`SnapshotRepository`]; the in-memory
//! implementation backs tests and single-process use.

use std::collections::HashMap;
use std::sync::RwLock;

use helm_types::{OrganizationId, SnapshotId};

use crate::error::{WorldError, WorldResult};
use crate::snapshot::WorldModelSnapshot;

/// Append-only, per-organization snapshot history.
pub trait SnapshotRepository: Send + Sync {
    /// Append a snapshot to its organization's history.
    fn save(&self, snapshot: WorldModelSnapshot) -> WorldResult<()>;

    fn get(&self, id: &SnapshotId) -> WorldResult<Option<WorldModelSnapshot>>;

    /// Most recently saved snapshot for the organization.
    fn latest(&self, organization_id: &OrganizationId) -> WorldResult<Option<WorldModelSnapshot>>;

    /// Up to `limit` most recent snapshots, oldest first.
    fn history(
        &self,
        organization_id: &OrganizationId,
        limit: usize,
    ) -> WorldResult<Vec<WorldModelSnapshot>>;
}

/// In-memory snapshot repository.
///
/// Keeps every saved snapshot unless built with [`with_retention`], in
/// which case only the newest `n` per organization survive a save.
///
/// [`with_retention`]: InMemorySnapshotRepository::with_retention
#[derive(Debug, Default)]
pub struct InMemorySnapshotRepository {
    histories: RwLock<HashMap<OrganizationId, Vec<WorldModelSnapshot>>>,
    retention: Option<usize>,
}

impl InMemorySnapshotRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap per-organization history at `max_snapshots` (at least one).
    pub fn with_retention(max_snapshots: usize) -> Self {
        Self {
            histories: RwLock::default(),
            retention: Some(max_snapshots.max(1)),
        }
    }
}

impl SnapshotRepository for InMemorySnapshotRepository {
    fn save(&self, snapshot: WorldModelSnapshot) -> WorldResult<()> {
        let mut histories = self.histories.write().map_err(|_| WorldError::LockError)?;
        let history = histories.entry(snapshot.organization_id.clone()).or_default();
        history.push(snapshot);
        if let Some(max) = self.retention {
            let excess = history.len().saturating_sub(max);
            history.drain(..excess);
        }
        Ok(())
    }

    fn get(&self, id: &SnapshotId) -> WorldResult<Option<WorldModelSnapshot>> {
        let histories = self.histories.read().map_err(|_| WorldError::LockError)?;
        Ok(histories
            .values()
            .flat_map(|h| h.iter())
            .find(|s| &s.id == id)
            .cloned())
    }

    fn latest(&self, organization_id: &OrganizationId) -> WorldResult<Option<WorldModelSnapshot>> {
        let histories = self.histories.read().map_err(|_| WorldError::LockError)?;
        Ok(histories
            .get(organization_id)
            .and_then(|h| h.last())
            .cloned())
    }

    fn history(
        &self,
        organization_id: &OrganizationId,
        limit: usize,
    ) -> WorldResult<Vec<WorldModelSnapshot>> {
        let histories = self.histories.read().map_err(|_| WorldError::LockError)?;
        let Some(history) = histories.get(organization_id) else {
            return Ok(Vec::new());
        };
        let start = history.len().saturating_sub(limit);
        Ok(history[start..].to_vec())
    }
}
