//! Opaque, globally unique identifiers.
//!
//! Generated ids carry a readable prefix so that records joined back from
//! external storage are easy to tell apart in logs.

use serde::{Deserialize, Serialize};

macro_rules! prefixed_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub String);

        impl $name {
            /// Generate a fresh, globally unique identifier.
            pub fn generate() -> Self {
                Self(format!(concat!($prefix, "-{}"), uuid::Uuid::new_v4()))
            }

            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

prefixed_id!(
    /// Identifier of a world-model snapshot.
    SnapshotId,
    "snapshot"
);
prefixed_id!(
    /// Identifier of a committed decision record.
    DecisionId,
    "decision"
);
prefixed_id!(
    /// Identifier of an action plan.
    PlanId,
    "plan"
);
prefixed_id!(
    /// Identifier of a single action step within a plan.
    StepId,
    "step"
);
prefixed_id!(
    /// Identifier of a candidate decision option.
    OptionId,
    "option"
);

/// Identifier of the organization a snapshot or decision belongs to.
///
/// Supplied by the caller, never generated here.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrganizationId(pub String);

impl OrganizationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for OrganizationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
