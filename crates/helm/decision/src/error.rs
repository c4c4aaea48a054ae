use thiserror::Error;

/// Errors from decision persistence.
#[derive(Debug, Error)]
pub enum DecisionError {
    #[error("decision not found: {0}")]
    NotFound(String),

    #[error("outcome already recorded for decision: {0}")]
    OutcomeAlreadyRecorded(String),

    #[error("lock acquisition failed")]
    LockError,
}

pub type DecisionResult<T> = Result<T, DecisionError>;
