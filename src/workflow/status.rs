//! The three-status approval policy.

use crate::core::{MachineConfig, State, StateMachine, TransitionRule};
use serde::{Deserialize, Serialize};

/// Status of an entity moving through the approval workflow.
///
/// Serialized lowercase (`"pending"`, `"approved"`, `"rejected"`), matching
/// the wire format the surrounding API exposes.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Approved,
    Rejected,
}

impl State for Status {
    fn name(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::Pending
    }
}

/// The actions the approval workflow understands.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Hold,
    Approve,
    Reject,
}

impl Action {
    /// The rule name this action dispatches to.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hold => "hold",
            Self::Approve => "approve",
            Self::Reject => "reject",
        }
    }

    /// Parse a rule name back into an action.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "hold" => Some(Self::Hold),
            "approve" => Some(Self::Approve),
            "reject" => Some(Self::Reject),
            _ => None,
        }
    }
}

/// The fixed approval policy, in declaration order.
///
/// `hold` re-opens a decided entity, `approve` and `reject` decide a
/// pending (or previously decided-the-other-way) one.
pub fn approval_rules() -> Vec<TransitionRule<Status>> {
    vec![
        TransitionRule::new(
            "hold",
            vec![Status::Approved, Status::Rejected],
            Status::Pending,
        ),
        TransitionRule::new(
            "approve",
            vec![Status::Pending, Status::Rejected],
            Status::Approved,
        ),
        TransitionRule::new(
            "reject",
            vec![Status::Pending, Status::Approved],
            Status::Rejected,
        ),
    ]
}

/// Build an engine over the approval policy, seeded from a persisted status.
///
/// The policy is static and valid, so construction cannot fail.
pub fn approval_machine(initial: Status) -> StateMachine<Status> {
    StateMachine::from_config(MachineConfig::new(initial, approval_rules()))
        .expect("approval policy should always build")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Status::Pending).unwrap(), "\"pending\"");
        assert_eq!(
            serde_json::to_string(&Status::Approved).unwrap(),
            "\"approved\""
        );
        assert_eq!(
            serde_json::to_string(&Status::Rejected).unwrap(),
            "\"rejected\""
        );
    }

    #[test]
    fn action_names_round_trip() {
        for action in [Action::Hold, Action::Approve, Action::Reject] {
            assert_eq!(Action::from_name(action.as_str()), Some(action));
        }
        assert_eq!(Action::from_name("nonexistent"), None);
    }

    #[test]
    fn pending_offers_approve_and_reject() {
        let machine = approval_machine(Status::Pending);

        assert_eq!(machine.transitions(), vec!["approve", "reject"]);
        assert!(!machine.can("hold"));
    }

    #[test]
    fn approval_scenario_walks_the_policy() {
        let mut machine = approval_machine(Status::Pending);

        assert!(machine.apply("approve"));
        assert!(machine.is(&Status::Approved));
        assert!(!machine.apply("approve"));
        assert!(machine.is(&Status::Approved));
        assert_eq!(machine.transitions(), vec!["hold", "reject"]);

        assert!(machine.apply("reject"));
        assert!(machine.is(&Status::Rejected));
        assert_eq!(machine.transitions(), vec!["hold", "approve"]);
    }

    #[test]
    fn hold_reopens_decided_entities() {
        let mut machine = approval_machine(Status::Approved);

        assert!(machine.apply("hold"));
        assert!(machine.is(&Status::Pending));

        let mut machine = approval_machine(Status::Rejected);
        assert!(machine.apply("hold"));
        assert!(machine.is(&Status::Pending));
    }
}
