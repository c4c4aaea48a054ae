//! Action intents and their classification.
//!
//! Intents are normally produced upstream and handed to
//! [`ActionOrchestrator::plan_with_intents`](crate::ActionOrchestrator::plan_with_intents).
//! [`KeywordIntentClassifier`] is the fallback for decisions that only carry
//! free action text.

use serde::{Deserialize, Serialize};

/// Canonical step types an action plan is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionIntent {
    Email,
    DatabaseWrite,
    Notification,
    ApiCall,
    Calendar,
    Payment,
    ContentCreation,
    AgentSpawn,
    Sms,
}

/// How a completed step is undone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollbackAction {
    RestorePreviousState,
    ReverseApiCall,
    CancelEvent,
    IssueRefund,
    DeleteContent,
    TerminateAgent,
}

impl ActionIntent {
    pub const ALL: [ActionIntent; 9] = [
        ActionIntent::Email,
        ActionIntent::DatabaseWrite,
        ActionIntent::Notification,
        ActionIntent::ApiCall,
        ActionIntent::Calendar,
        ActionIntent::Payment,
        ActionIntent::ContentCreation,
        ActionIntent::AgentSpawn,
        ActionIntent::Sms,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActionIntent::Email => "email",
            ActionIntent::DatabaseWrite => "database_write",
            ActionIntent::Notification => "notification",
            ActionIntent::ApiCall => "api_call",
            ActionIntent::Calendar => "calendar",
            ActionIntent::Payment => "payment",
            ActionIntent::ContentCreation => "content_creation",
            ActionIntent::AgentSpawn => "agent_spawn",
            ActionIntent::Sms => "sms",
        }
    }

    /// `None` for outbound messages (email, notification, sms).
    pub fn rollback_action(self) -> Option<RollbackAction> {
        match self {
            ActionIntent::DatabaseWrite => Some(RollbackAction::RestorePreviousState),
            ActionIntent::ApiCall => Some(RollbackAction::ReverseApiCall),
            ActionIntent::Calendar => Some(RollbackAction::CancelEvent),
            ActionIntent::Payment => Some(RollbackAction::IssueRefund),
            ActionIntent::ContentCreation => Some(RollbackAction::DeleteContent),
            ActionIntent::AgentSpawn => Some(RollbackAction::TerminateAgent),
            ActionIntent::Email | ActionIntent::Notification | ActionIntent::Sms => None,
        }
    }

    pub fn is_rollback_eligible(self) -> bool {
        self.rollback_action().is_some()
    }

    fn verb(self) -> &'static str {
        match self {
            ActionIntent::Email => "Send email",
            ActionIntent::DatabaseWrite => "Write to database",
            ActionIntent::Notification => "Send notification",
            ActionIntent::ApiCall => "Call external API",
            ActionIntent::Calendar => "Schedule calendar event",
            ActionIntent::Payment => "Process payment",
            ActionIntent::ContentCreation => "Create content",
            ActionIntent::AgentSpawn => "Spawn agent",
            ActionIntent::Sms => "Send SMS",
        }
    }

    /// Step description for this intent acting on `action`.
    pub fn describe(self, action: &str) -> String {
        format!("{}: {}", self.verb(), action)
    }
}

impl std::fmt::Display for ActionIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ActionIntent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionIntent::ALL
            .into_iter()
            .find(|intent| intent.as_str() == s)
            .ok_or_else(|| format!("unknown action intent: {}", s))
    }
}

impl std::fmt::Display for RollbackAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RollbackAction::RestorePreviousState => "restore_previous_state",
            RollbackAction::ReverseApiCall => "reverse_api_call",
            RollbackAction::CancelEvent => "cancel_event",
            RollbackAction::IssueRefund => "issue_refund",
            RollbackAction::DeleteContent => "delete_content",
            RollbackAction::TerminateAgent => "terminate_agent",
        };
        write!(f, "{}", label)
    }
}

/// Maps a decision's action text to intents, in execution order.
pub trait IntentClassifier: Send + Sync {
    fn classify(&self, action: &str) -> Vec<ActionIntent>;
}

/// Substring fallback classifier.
///
/// | keywords         | intent           |
/// |------------------|------------------|
/// | send, email      | `email`          |
/// | update, save     | `database_write` |
/// | notify, alert    | `notification`   |
///
/// Each intent appears at most once, in the table's order, whatever the
/// word order of the action text.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordIntentClassifier;

const KEYWORD_TABLE: &[(&[&str], ActionIntent)] = &[
    (&["send", "email"], ActionIntent::Email),
    (&["update", "save"], ActionIntent::DatabaseWrite),
    (&["notify", "alert"], ActionIntent::Notification),
];

impl IntentClassifier for KeywordIntentClassifier {
    fn classify(&self, action: &str) -> Vec<ActionIntent> {
        let lowered = action.to_lowercase();
        KEYWORD_TABLE
            .iter()
            .filter(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
            .map(|(_, intent)| *intent)
            .collect()
    }
}
