//! Decision persistence.

use std::sync::RwLock;

use helm_types::{DecisionId, OrganizationId};

use crate::error::{DecisionError, DecisionResult};
use crate::record::{DecisionOutcome, DecisionRecord};

pub trait DecisionRepository: Send + Sync {
    /// Store a record, replacing any record with the same id.
    fn save(&self, record: DecisionRecord) -> DecisionResult<()>;

    fn get(&self, id: &DecisionId) -> DecisionResult<Option<DecisionRecord>>;

    /// Records for one organization in the order they were first saved.
    fn list_for_org(&self, organization_id: &OrganizationId) -> DecisionResult<Vec<DecisionRecord>>;

    /// Attach an outcome. An outcome can be recorded once per decision.
    fn record_outcome(&self, id: &DecisionId, outcome: DecisionOutcome) -> DecisionResult<DecisionRecord>;
}

#[derive(Debug, Default)]
pub struct InMemoryDecisionRepository {
    records: RwLock<Vec<DecisionRecord>>,
}

impl InMemoryDecisionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DecisionRepository for InMemoryDecisionRepository {
    fn save(&self, record: DecisionRecord) -> DecisionResult<()> {
        let mut records = self.records.write().map_err(|_| DecisionError::LockError)?;
        match records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
        Ok(())
    }

    fn get(&self, id: &DecisionId) -> DecisionResult<Option<DecisionRecord>> {
        let records = self.records.read().map_err(|_| DecisionError::LockError)?;
        Ok(records.iter().find(|r| &r.id == id).cloned())
    }

    fn list_for_org(&self, organization_id: &OrganizationId) -> DecisionResult<Vec<DecisionRecord>> {
        let records = self.records.read().map_err(|_| DecisionError::LockError)?;
        Ok(records
            .iter()
            .filter(|r| &r.organization_id == organization_id)
            .cloned()
            .collect())
    }

    fn record_outcome(&self, id: &DecisionId, outcome: DecisionOutcome) -> DecisionResult<DecisionRecord> {
        let mut records = self.records.write().map_err(|_| DecisionError::LockError)?;
        let record = records
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| DecisionError::NotFound(id.to_string()))?;

        if record.outcome.is_some() {
            return Err(DecisionError::OutcomeAlreadyRecorded(id.to_string()));
        }
        record.outcome = Some(outcome);
        Ok(record.clone())
    }
}
