//! Named transition rules.

use super::state::State;
use serde::{Deserialize, Serialize};

/// A named, directed edge-set: one or more legal source states and exactly
/// one destination state.
///
/// Rules are declarative data. Whether a rule may fire is nothing more than
/// a membership test of the machine's current state against `from`; there
/// are no wildcards and no "any state" sentinel.
///
/// Invariants (enforced at machine construction, not here): `name` is
/// unique within one configuration and does not collide with the reserved
/// query names; `from` is non-empty.
///
/// # Example
///
/// ```rust
/// use flowstate::core::TransitionRule;
/// use flowstate::state_enum;
///
/// state_enum! {
///     enum Status {
///         Pending,
///         Approved,
///     }
/// }
///
/// let rule = TransitionRule::new("approve", vec![Status::Pending], Status::Approved);
/// assert!(rule.applies_from(&Status::Pending));
/// assert!(!rule.applies_from(&Status::Approved));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRule<S: State> {
    /// Identifier for this rule, unique within a configuration. Doubles as
    /// the action name callers pass to `can` and `apply`.
    pub name: String,
    /// The states this rule may fire from.
    pub from: Vec<S>,
    /// The single destination state.
    pub to: S,
}

impl<S: State> TransitionRule<S> {
    /// Create a rule from its parts.
    pub fn new(name: impl Into<String>, from: Vec<S>, to: S) -> Self {
        Self {
            name: name.into(),
            from,
            to,
        }
    }

    /// Check whether this rule may fire from the given state (pure).
    ///
    /// Exact value equality against each entry of `from`.
    pub fn applies_from(&self, current: &S) -> bool {
        self.from.contains(current)
    }
}
