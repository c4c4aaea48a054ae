//! The six business-state domains held by a snapshot.
//!
//! Defaults are deliberately neutral so a freshly created snapshot scores
//! as "unremarkable" rather than healthy or alarming:
//!
//! | domain   | default                                                      |
//! |----------|--------------------------------------------------------------|
//! | business | no MRR, no revenue streams, churn 0, pipeline 0              |
//! | market   | demand index 0.5, no competitors, no trends                  |
//! | client   | no clients, nothing at risk                                  |
//! | founder  | energy 0.7, focus 0.7, burnout risk 0.2, decision fatigue 0.2|
//! | capital  | no cash or burn recorded, runway 12 months, reserve ratio 0.3|
//! | risk     | overall risk 0.3, no active risks                            |

use serde::{Deserialize, Serialize};

/// Names one of the six domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Business,
    Market,
    Client,
    Founder,
    Capital,
    Risk,
}

impl Domain {
    pub const ALL: [Domain; 6] = [
        Domain::Business,
        Domain::Market,
        Domain::Client,
        Domain::Founder,
        Domain::Capital,
        Domain::Risk,
    ];
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Domain::Business => "business",
            Domain::Market => "market",
            Domain::Client => "client",
            Domain::Founder => "founder",
            Domain::Capital => "capital",
            Domain::Risk => "risk",
        };
        write!(f, "{}", name)
    }
}

/// A single domain's state, as returned by [`crate::WorldModelSnapshot::query`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "domain", content = "state", rename_all = "snake_case")]
pub enum DomainState {
    Business(BusinessState),
    Market(MarketState),
    Client(ClientState),
    Founder(FounderState),
    Capital(CapitalState),
    Risk(RiskState),
}

impl DomainState {
    pub fn domain(&self) -> Domain {
        match self {
            DomainState::Business(_) => Domain::Business,
            DomainState::Market(_) => Domain::Market,
            DomainState::Client(_) => Domain::Client,
            DomainState::Founder(_) => Domain::Founder,
            DomainState::Capital(_) => Domain::Capital,
            DomainState::Risk(_) => Domain::Risk,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueStream {
    pub name: String,
    pub mrr: f64,
    /// Month-over-month growth, as a fraction.
    pub growth_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessState {
    pub current_mrr: f64,
    pub revenue_streams: Vec<RevenueStream>,
    /// Monthly churn, as a fraction.
    pub churn_rate: f64,
    pub pipeline_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketState {
    /// Relative demand in [0, 1].
    pub demand_index: f64,
    pub competitor_count: u32,
    pub trends: Vec<String>,
}

impl Default for MarketState {
    fn default() -> Self {
        Self {
            demand_index: 0.5,
            competitor_count: 0,
            trends: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientHealth {
    pub client_id: String,
    #[serde(default)]
    pub name: String,
    /// Health in [0, 1].
    pub health: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientState {
    pub clients: Vec<ClientHealth>,
    pub at_risk_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FounderState {
    pub energy: f64,
    pub focus: f64,
    pub burnout_risk: f64,
    pub decision_fatigue: f64,
}

impl Default for FounderState {
    fn default() -> Self {
        Self {
            energy: 0.7,
            focus: 0.7,
            burnout_risk: 0.2,
            decision_fatigue: 0.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapitalState {
    pub cash_on_hand: f64,
    pub monthly_burn: f64,
    pub runway_months: f64,
    /// Cash reserve as a fraction of annual spend.
    pub reserve_ratio: f64,
}

impl Default for CapitalState {
    fn default() -> Self {
        Self {
            cash_on_hand: 0.0,
            monthly_burn: 0.0,
            runway_months: 12.0,
            reserve_ratio: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskState {
    /// Aggregate risk in [0, 1].
    pub overall_risk: f64,
    pub active_risks: Vec<String>,
}

impl Default for RiskState {
    fn default() -> Self {
        Self {
            overall_risk: 0.3,
            active_risks: Vec::new(),
        }
    }
}

/// A named business entity (client, product, team, vendor...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    pub kind: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRelation {
    pub from: String,
    pub to: String,
    pub relation: String,
}

/// Entities known to the organization and how they relate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityGraph {
    pub entities: Vec<Entity>,
    pub relations: Vec<EntityRelation>,
}

impl EntityGraph {
    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Entities directly related from `id`.
    pub fn neighbors(&self, id: &str) -> Vec<&Entity> {
        self.relations
            .iter()
            .filter(|r| r.from == id)
            .filter_map(|r| self.entity(&r.to))
            .collect()
    }
}
