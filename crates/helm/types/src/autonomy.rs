use serde::{Deserialize, Serialize};

/// How much of a decision may execute without human approval.
///
/// Ordered from least to most autonomous, so `min` picks the more
/// conservative of two levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum AutonomyLevel {
    /// Hand the decision to a human.
    Escalate = 0,
    /// Execute only with step-by-step human confirmation.
    Assisted = 1,
    /// Execute after a single human approval.
    Supervised = 2,
    /// Execute without approval.
    Autonomous = 3,
}

impl AutonomyLevel {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn requires_approval(self) -> bool {
        self < AutonomyLevel::Autonomous
    }
}

impl From<AutonomyLevel> for u8 {
    fn from(level: AutonomyLevel) -> Self {
        level.as_u8()
    }
}

impl TryFrom<u8> for AutonomyLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AutonomyLevel::Escalate),
            1 => Ok(AutonomyLevel::Assisted),
            2 => Ok(AutonomyLevel::Supervised),
            3 => Ok(AutonomyLevel::Autonomous),
            other => Err(format!("autonomy level out of range: {} (must be 0..=3)", other)),
        }
    }
}

impl std::fmt::Display for AutonomyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}
