use helm_types::{AutonomyLevel, Reversibility};

use crate::risk::RiskLevel;

/// Autonomy the selected option needs given the overall risk.
pub fn required_autonomy(overall_risk: RiskLevel, reversibility: Reversibility) -> AutonomyLevel {
    if overall_risk == RiskLevel::Critical || reversibility == Reversibility::None {
        AutonomyLevel::Assisted
    } else if overall_risk == RiskLevel::High || reversibility == Reversibility::Partial {
        AutonomyLevel::Supervised
    } else {
        AutonomyLevel::Autonomous
    }
}

/// The caller's ceiling always wins.
pub fn grant_autonomy(required: AutonomyLevel, ceiling: AutonomyLevel) -> AutonomyLevel {
    required.min(ceiling)
}
