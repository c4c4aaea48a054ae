//! Directed, weighted, lagged causal graph between named state variables.
//!
//! The graph may contain cycles; chain search guards against them per path.

use serde::{Deserialize, Serialize};

use crate::snapshot::{SnapshotPatch, WorldModelSnapshot};

/// Confidence assigned to edges added without an explicit confidence.
pub const DEFAULT_CAUSAL_CONFIDENCE: f64 = 0.5;

/// Default depth bound for [`WorldModelSnapshot::find_causal_chain`].
pub const DEFAULT_MAX_CHAIN_DEPTH: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CausalRelationship {
    pub cause: String,
    pub effect: String,
    /// Multiplier applied to a change in `cause`.
    pub strength: f64,
    /// Delay before the effect shows, in hours.
    pub lag: f64,
    /// Confidence in [0, 1].
    #[serde(default = "default_confidence")]
    pub confidence: f64,
}

fn default_confidence() -> f64 {
    DEFAULT_CAUSAL_CONFIDENCE
}

impl CausalRelationship {
    pub fn new(cause: impl Into<String>, effect: impl Into<String>, strength: f64, lag: f64) -> Self {
        Self {
            cause: cause.into(),
            effect: effect.into(),
            strength,
            lag,
            confidence: DEFAULT_CAUSAL_CONFIDENCE,
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }
}

/// An ordered sequence of edges, each starting where the previous ended.
pub type CausalChain = Vec<CausalRelationship>;

/// Combined multiplier along a chain.
pub fn chain_strength(chain: &[CausalRelationship]) -> f64 {
    chain.iter().map(|edge| edge.strength).product()
}

/// Total lag along a chain.
pub fn chain_lag(chain: &[CausalRelationship]) -> f64 {
    chain.iter().map(|edge| edge.lag).sum()
}

impl WorldModelSnapshot {
    /// Derive a snapshot with one more causal edge (confidence 0.5).
    pub fn add_causal_relationship(
        &self,
        cause: impl Into<String>,
        effect: impl Into<String>,
        strength: f64,
        lag: f64,
    ) -> WorldModelSnapshot {
        let mut edges = self.causal_relationships.clone();
        edges.push(CausalRelationship::new(cause, effect, strength, lag));
        self.update(SnapshotPatch::new().causal_relationships(edges))
    }

    /// Find every chain from `from` to `to` of at most `max_depth` edges.
    ///
    /// Depth-first over outgoing edges. A path never enters the same effect
    /// node twice, so cycles terminate. The origin is not an entered node,
    /// which lets `find_causal_chain(x, x, d)` report feedback loops.
    pub fn find_causal_chain(&self, from: &str, to: &str, max_depth: usize) -> Vec<CausalChain> {
        let mut found = Vec::new();
        let mut path: Vec<&CausalRelationship> = Vec::new();
        let mut visited: Vec<&str> = Vec::new();

        search(
            &self.causal_relationships,
            from,
            to,
            max_depth,
            &mut path,
            &mut visited,
            &mut found,
        );

        tracing::debug!(from, to, max_depth, chains = found.len(), "causal chain search");
        found
    }
}

fn search<'a>(
    edges: &'a [CausalRelationship],
    current: &str,
    target: &str,
    depth_left: usize,
    path: &mut Vec<&'a CausalRelationship>,
    visited: &mut Vec<&'a str>,
    found: &mut Vec<CausalChain>,
) {
    if depth_left == 0 {
        return;
    }

    for edge in edges.iter().filter(|e| e.cause == current) {
        if visited.contains(&edge.effect.as_str()) {
            continue;
        }

        path.push(edge);
        if edge.effect == target {
            found.push(path.iter().map(|e| (*e).clone()).collect());
        } else {
            visited.push(&edge.effect);
            search(edges, &edge.effect, target, depth_left - 1, path, visited, found);
            visited.pop();
        }
        path.pop();
    }
}
