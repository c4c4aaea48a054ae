use thiserror::Error;

/// Errors an [`Executor`](crate::Executor) reports for a single call.
///
/// The orchestrator records these; it never returns them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExecutorError {
    #[error("step failed: {0}")]
    StepFailed(String),

    #[error("rollback failed: {0}")]
    RollbackFailed(String),

    #[error("executor unavailable: {0}")]
    Unavailable(String),
}

pub type ExecutorResult<T> = Result<T, ExecutorError>;
