use serde::{Deserialize, Serialize};

use crate::plan::FailurePolicy;

/// Configuration for the action orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrchestratorConfig {
    /// Plan timeout before per-step allowances.
    pub base_timeout_ms: u64,
    pub per_step_timeout_ms: u64,
    /// Cancel a step once the plan's remaining budget runs out. When
    /// false the timeout is only reported.
    pub enforce_timeout: bool,
    /// Policy for steps without a stricter requirement. Payment steps
    /// always roll back.
    pub default_failure_policy: FailurePolicy,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            base_timeout_ms: 30_000,
            per_step_timeout_ms: 10_000,
            enforce_timeout: false,
            default_failure_policy: FailurePolicy::Continue,
        }
    }
}

impl OrchestratorConfig {
    pub fn plan_timeout_ms(&self, steps: usize) -> u64 {
        self.base_timeout_ms
            .saturating_add(self.per_step_timeout_ms.saturating_mul(steps as u64))
    }
}
