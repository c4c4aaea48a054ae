//! CLI configuration

use std::path::Path;

use anyhow::Context;
use helm_action::OrchestratorConfig;
use helm_decision::DecisionConfig;
use helm_reasoning::ReasoningConfig;
use helm_world::WorldConfig;
use serde::{Deserialize, Serialize};

/// Engine configuration. Every section is optional and falls back to
/// its defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelmConfig {
    pub world: WorldConfig,
    pub reasoning: ReasoningConfig,
    pub decision: DecisionConfig,
    pub orchestrator: OrchestratorConfig,
}

impl HelmConfig {
    /// Load configuration from `path`, or defaults when no file exists.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path.filter(|p| p.exists()) else {
            return Ok(Self::default());
        };

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}
