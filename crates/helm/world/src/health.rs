//! Composite organizational health score.
//!
//! ```text
//! health = 0.25 business + 0.25 capital + 0.20 risk + 0.15 founder + 0.15 client
//! ```
//!
//! Every per-domain score is clamped to [0, 1], so the composite is too.
//! The market domain does not contribute.

use serde::{Deserialize, Serialize};

use crate::snapshot::WorldModelSnapshot;
use crate::state::{BusinessState, CapitalState, ClientState, FounderState, RiskState};

pub const BUSINESS_WEIGHT: f64 = 0.25;
pub const CAPITAL_WEIGHT: f64 = 0.25;
pub const RISK_WEIGHT: f64 = 0.20;
pub const FOUNDER_WEIGHT: f64 = 0.15;
pub const CLIENT_WEIGHT: f64 = 0.15;

/// Score used for the client domain when no clients are recorded.
const NEUTRAL_CLIENT_HEALTH: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthScore {
    pub overall: f64,
    pub business: f64,
    pub capital: f64,
    pub risk: f64,
    pub founder: f64,
    pub client: f64,
}

pub fn compute_health_score(snapshot: &WorldModelSnapshot) -> HealthScore {
    let business = business_health(&snapshot.business);
    let capital = capital_health(&snapshot.capital);
    let risk = risk_health(&snapshot.risk);
    let founder = founder_health(&snapshot.founder);
    let client = client_health(&snapshot.client);

    let overall = BUSINESS_WEIGHT * business
        + CAPITAL_WEIGHT * capital
        + RISK_WEIGHT * risk
        + FOUNDER_WEIGHT * founder
        + CLIENT_WEIGHT * client;

    HealthScore {
        overall: unit(overall),
        business,
        capital,
        risk,
        founder,
        client,
    }
}

/// Mean stream growth averaged with churn health (`1 - min(1, 10 * churn)`).
fn business_health(state: &BusinessState) -> f64 {
    let growth = if state.revenue_streams.is_empty() {
        0.0
    } else {
        state.revenue_streams.iter().map(|s| s.growth_rate).sum::<f64>()
            / state.revenue_streams.len() as f64
    };
    let churn_health = 1.0 - (10.0 * state.churn_rate).min(1.0);
    unit((growth + churn_health) / 2.0)
}

fn capital_health(state: &CapitalState) -> f64 {
    let runway = (state.runway_months / 12.0).min(1.0);
    let reserve = (state.reserve_ratio / 0.3).min(1.0);
    unit(0.7 * runway + 0.3 * reserve)
}

fn founder_health(state: &FounderState) -> f64 {
    let base = (state.energy + state.focus) / 2.0;
    unit(base - 0.5 * state.burnout_risk - 0.3 * state.decision_fatigue)
}

fn client_health(state: &ClientState) -> f64 {
    let average = if state.clients.is_empty() {
        NEUTRAL_CLIENT_HEALTH
    } else {
        state.clients.iter().map(|c| c.health).sum::<f64>() / state.clients.len() as f64
    };
    unit(average - 0.1 * state.at_risk_count as f64)
}

fn risk_health(state: &RiskState) -> f64 {
    unit(1.0 - state.overall_risk)
}

fn unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
