//! # helm-reasoning
//!
//! Reasoning Engine: consumes perceived signals, a world-model snapshot,
//! constraints and objectives, and produces an [`InferenceChain`] whose
//! every step carries its premise, reasoning, evidence and confidence.
//!
//! ```text
//!   signals ─┐
//!   snapshot ┼─> evidence ─> constraint check ─> objective evaluation ─> synthesis
//!   rules ───┘       │              │                     │                 │
//!                  step 1         step 2                step 3          Verdict
//! ```
//!
//! The chain's confidence is the mean of the three step confidences.
//! Degraded inputs lower confidence; they are never errors.

#![deny(unsafe_code)]

pub mod chain;
pub mod config;
pub mod engine;

pub use chain::{Evidence, InferenceChain, InferenceStep, ReasoningStage, Verdict};
pub use config::ReasoningConfig;
pub use engine::ReasoningEngine;
