use thiserror::Error;

/// Errors from world-model persistence.
///
/// The derivations themselves (update, simulation, health, anomalies)
/// cannot fail; only the repository layer can.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("snapshot not found: {0}")]
    SnapshotNotFound(String),

    #[error("no snapshot stored for organization: {0}")]
    NoSnapshotForOrganization(String),

    #[error("lock acquisition failed")]
    LockError,
}

/// Convenience type alias for world-model results.
pub type WorldResult<T> = Result<T, WorldError>;
