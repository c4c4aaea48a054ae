//! # helm-action
//!
//! Action Orchestrator: converts a committed
//! [`DecisionRecord`](helm_decision::DecisionRecord) into an
//! [`ActionPlan`] and drives it against an injected [`Executor`].
//!
//! Each plan carries:
//!
//! - ordered steps, one per classified [`ActionIntent`]
//! - a rollback plan in reverse execution order
//! - one verification check per step, with its [`FailurePolicy`]
//! - a timeout budget of 30 s plus 10 s per step
//!
//! ```rust,no_run
//! # async fn demo(record: helm_decision::DecisionRecord) {
//! use helm_action::{ActionOrchestrator, SimulatedExecutor};
//!
//! let orchestrator = ActionOrchestrator::default();
//! let plan = orchestrator.plan(&record);
//! let result = orchestrator.execute(&plan, &SimulatedExecutor::new()).await;
//! assert!(result.overall_success);
//! # }
//! ```

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod executor;
pub mod intent;
pub mod orchestrator;
pub mod plan;
pub mod result;

pub use config::OrchestratorConfig;
pub use error::{ExecutorError, ExecutorResult};
pub use executor::{Executor, ExecutorCall, SimulatedExecutor, StepOutcome};
pub use intent::{ActionIntent, IntentClassifier, KeywordIntentClassifier, RollbackAction};
pub use orchestrator::ActionOrchestrator;
pub use plan::{ActionPlan, ActionStep, FailurePolicy, RollbackStep, VerificationCheck};
pub use result::{ActionError, ActionErrorKind, ActionResult, RollbackFailure, StepResult, StepStatus};
