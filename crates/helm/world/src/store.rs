//! World model store: the pure snapshot operations bound to a repository.

use helm_types::{OrganizationId, SnapshotId};

use crate::anomaly::{detect_anomalies_with, WorldAnomaly};
use crate::config::WorldConfig;
use crate::error::{WorldError, WorldResult};
use crate::repository::SnapshotRepository;
use crate::snapshot::{SnapshotPatch, WorldModelSnapshot};

/// Creates, advances and inspects organization snapshots.
///
/// Every transition derives a new snapshot and appends it to history.
pub struct WorldModelStore<R: SnapshotRepository> {
    repository: R,
    config: WorldConfig,
}

impl<R: SnapshotRepository> WorldModelStore<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            config: WorldConfig::default(),
        }
    }

    pub fn with_config(mut self, config: WorldConfig) -> Self {
        self.config = config;
        self
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Create and store an organization's first (or a fresh) snapshot.
    pub fn create(
        &self,
        organization_id: OrganizationId,
        patch: SnapshotPatch,
    ) -> WorldResult<WorldModelSnapshot> {
        let snapshot = WorldModelSnapshot::create(organization_id, patch);
        self.repository.save(snapshot.clone())?;
        tracing::info!(
            snapshot_id = %snapshot.id,
            organization = %snapshot.organization_id,
            "World model snapshot created"
        );
        Ok(snapshot)
    }

    /// Derive a successor of `current` and append it to history.
    pub fn apply_update(
        &self,
        current: &WorldModelSnapshot,
        patch: SnapshotPatch,
    ) -> WorldResult<WorldModelSnapshot> {
        let next = current.update(patch);
        self.repository.save(next.clone())?;
        tracing::info!(
            snapshot_id = %next.id,
            previous = %current.id,
            organization = %next.organization_id,
            "World model snapshot updated"
        );
        Ok(next)
    }

    /// Apply `patch` to the organization's latest snapshot.
    pub fn update_latest(
        &self,
        organization_id: &OrganizationId,
        patch: SnapshotPatch,
    ) -> WorldResult<WorldModelSnapshot> {
        let current = self.current(organization_id)?;
        self.apply_update(&current, patch)
    }

    pub fn current(&self, organization_id: &OrganizationId) -> WorldResult<WorldModelSnapshot> {
        self.repository
            .latest(organization_id)?
            .ok_or_else(|| WorldError::NoSnapshotForOrganization(organization_id.to_string()))
    }

    pub fn get(&self, id: &SnapshotId) -> WorldResult<WorldModelSnapshot> {
        self.repository
            .get(id)?
            .ok_or_else(|| WorldError::SnapshotNotFound(id.to_string()))
    }

    pub fn history(
        &self,
        organization_id: &OrganizationId,
        limit: usize,
    ) -> WorldResult<Vec<WorldModelSnapshot>> {
        self.repository.history(organization_id, limit)
    }

    /// Detect anomalies in `current` against the snapshots stored before it.
    pub fn anomalies(&self, current: &WorldModelSnapshot) -> WorldResult<Vec<WorldAnomaly>> {
        let history = self
            .repository
            .history(&current.organization_id, self.config.history_window + 1)?;
        let previous: Vec<WorldModelSnapshot> = history
            .into_iter()
            .filter(|s| s.id != current.id)
            .collect();
        let start = previous.len().saturating_sub(self.config.history_window);
        Ok(detect_anomalies_with(current, &previous[start..], &self.config))
    }

    /// Detect anomalies in the organization's latest snapshot.
    pub fn current_anomalies(
        &self,
        organization_id: &OrganizationId,
    ) -> WorldResult<Vec<WorldAnomaly>> {
        let current = self.current(organization_id)?;
        self.anomalies(&current)
    }
}
