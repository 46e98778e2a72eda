//! The state machine engine: configuration, construction, queries, and the
//! single mutation path.

use super::rule::TransitionRule;
use super::state::State;
use crate::builder::BuildError;
use serde::{Deserialize, Serialize};

/// Rule names that would shadow the machine's query operations.
///
/// Rule names double as action identifiers at the caller's boundary (an API
/// request says "apply `approve`"), so a rule named after a query operation
/// could never be dispatched unambiguously. Construction rejects them.
pub const RESERVED_NAMES: [&str; 4] = ["can", "is", "state", "transitions"];

/// Declarative machine configuration: an initial state plus an ordered list
/// of transition rules.
///
/// A configuration is plain data and freely serializable. The machine takes
/// its own copy at construction, so mutating a configuration value after
/// building from it has no effect on the machine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct MachineConfig<S: State> {
    /// The state a fresh machine starts in.
    pub initial: S,
    /// The rules, in declaration order. Order is observable: `transitions`
    /// reports applicable rule names in this order.
    pub rules: Vec<TransitionRule<S>>,
}

impl<S: State> MachineConfig<S> {
    /// Create a configuration from its parts.
    pub fn new(initial: S, rules: Vec<TransitionRule<S>>) -> Self {
        Self { initial, rules }
    }
}

/// Look up the state that applying `action` from `current` would produce.
///
/// This is the pure core of the engine: `None` means the action either does
/// not exist or is not legal from `current`; `Some(next)` carries the
/// destination state. Both the machine's `apply` and transient queries by
/// collaborator code are built on this function.
pub fn next_state<S: State>(
    rules: &[TransitionRule<S>],
    current: &S,
    action: &str,
) -> Option<S> {
    rules
        .iter()
        .find(|rule| rule.name == action)
        .filter(|rule| rule.applies_from(current))
        .map(|rule| rule.to.clone())
}

/// The state machine engine.
///
/// Holds exactly one mutable field, the current state, bound to a fixed
/// rule list. The only way the state changes is [`StateMachine::apply`];
/// every other operation is a pure read.
///
/// A machine is exclusively owned by its caller. Code that needs to
/// arbitrate concurrent writers to one underlying record (two requests
/// racing on a persisted status) must do so outside the engine, e.g. with
/// compare-and-swap on the stored state value.
///
/// # Example
///
/// ```rust
/// use flowstate::core::{MachineConfig, StateMachine, TransitionRule};
/// use flowstate::state_enum;
///
/// state_enum! {
///     enum Status {
///         Pending,
///         Approved,
///     }
/// }
///
/// let config = MachineConfig::new(
///     Status::Pending,
///     vec![TransitionRule::new("approve", vec![Status::Pending], Status::Approved)],
/// );
///
/// let mut machine = StateMachine::from_config(config).unwrap();
/// assert!(machine.can("approve"));
/// assert!(machine.apply("approve"));
/// assert!(machine.is(&Status::Approved));
/// assert!(machine.transitions().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine<S: State> {
    current: S,
    rules: Vec<TransitionRule<S>>,
}

impl<S: State> StateMachine<S> {
    /// Build a machine from a configuration.
    ///
    /// Fails if the rule list is empty, or if any rule name collides with
    /// one of [`RESERVED_NAMES`] — the error lists every colliding name,
    /// not just the first. Construction is all-or-nothing: on error no
    /// machine value exists.
    pub fn from_config(config: MachineConfig<S>) -> Result<Self, BuildError> {
        if config.rules.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        let clashing: Vec<String> = config
            .rules
            .iter()
            .filter(|rule| RESERVED_NAMES.contains(&rule.name.as_str()))
            .map(|rule| rule.name.clone())
            .collect();

        if !clashing.is_empty() {
            return Err(BuildError::ReservedName { names: clashing });
        }

        Ok(Self {
            current: config.initial,
            rules: config.rules,
        })
    }

    /// Get the current state (pure).
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Check whether the machine is currently in the given state (pure).
    pub fn is(&self, candidate: &S) -> bool {
        self.current == *candidate
    }

    /// Check whether the named action is legal right now (pure).
    ///
    /// `false` both for an unknown name and for a known rule whose `from`
    /// set does not contain the current state; neither case is an error.
    pub fn can(&self, action: &str) -> bool {
        self.rules
            .iter()
            .find(|rule| rule.name == action)
            .is_some_and(|rule| rule.applies_from(&self.current))
    }

    /// Names of every rule legal from the current state, in declaration
    /// order (pure).
    ///
    /// A state with no outgoing rules yields an empty list; that is a
    /// valid terminal-like condition, not an error.
    pub fn transitions(&self) -> Vec<&str> {
        self.rules
            .iter()
            .filter(|rule| rule.applies_from(&self.current))
            .map(|rule| rule.name.as_str())
            .collect()
    }

    /// Apply the named action.
    ///
    /// If a rule with that name exists and is legal from the current state,
    /// the machine moves to the rule's destination and this returns `true`.
    /// Otherwise the state is left untouched and this returns `false`.
    /// This is the sole mutation path.
    pub fn apply(&mut self, action: &str) -> bool {
        match next_state(&self.rules, &self.current, action) {
            Some(next) => {
                self.current = next;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Pending,
        Approved,
        Rejected,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Pending => "pending",
                Self::Approved => "approved",
                Self::Rejected => "rejected",
            }
        }
    }

    fn approval_config() -> MachineConfig<TestState> {
        MachineConfig::new(
            TestState::Pending,
            vec![
                TransitionRule::new(
                    "hold",
                    vec![TestState::Approved, TestState::Rejected],
                    TestState::Pending,
                ),
                TransitionRule::new(
                    "approve",
                    vec![TestState::Pending, TestState::Rejected],
                    TestState::Approved,
                ),
                TransitionRule::new(
                    "reject",
                    vec![TestState::Pending, TestState::Approved],
                    TestState::Rejected,
                ),
            ],
        )
    }

    #[test]
    fn from_config_requires_rules() {
        let config = MachineConfig::new(TestState::Pending, Vec::new());
        let result = StateMachine::from_config(config);

        assert!(matches!(result, Err(BuildError::NoTransitions)));
    }

    #[test]
    fn from_config_rejects_reserved_names() {
        let config = MachineConfig::new(
            TestState::Pending,
            vec![TransitionRule::new(
                "state",
                vec![TestState::Pending],
                TestState::Approved,
            )],
        );

        let result = StateMachine::from_config(config);
        match result {
            Err(BuildError::ReservedName { names }) => assert_eq!(names, vec!["state"]),
            other => panic!("expected ReservedName, got {other:?}"),
        }
    }

    #[test]
    fn from_config_reports_every_reserved_clash() {
        let config = MachineConfig::new(
            TestState::Pending,
            vec![
                TransitionRule::new("can", vec![TestState::Pending], TestState::Approved),
                TransitionRule::new("approve", vec![TestState::Pending], TestState::Approved),
                TransitionRule::new("transitions", vec![TestState::Pending], TestState::Rejected),
            ],
        );

        let result = StateMachine::from_config(config);
        match result {
            Err(BuildError::ReservedName { names }) => {
                assert_eq!(names, vec!["can", "transitions"]);
            }
            other => panic!("expected ReservedName, got {other:?}"),
        }
    }

    #[test]
    fn machine_starts_in_initial_state() {
        let machine = StateMachine::from_config(approval_config()).unwrap();

        assert_eq!(machine.current_state(), &TestState::Pending);
        assert!(machine.is(&TestState::Pending));
        assert!(!machine.is(&TestState::Approved));
    }

    #[test]
    fn machine_owns_its_copy_of_the_config() {
        let mut config = approval_config();
        let machine = StateMachine::from_config(config.clone()).unwrap();

        config.rules.clear();
        config.initial = TestState::Rejected;

        assert_eq!(machine.current_state(), &TestState::Pending);
        assert_eq!(machine.transitions(), vec!["approve", "reject"]);
    }

    #[test]
    fn apply_moves_to_destination_and_returns_true() {
        let mut machine = StateMachine::from_config(approval_config()).unwrap();

        assert!(machine.apply("approve"));
        assert_eq!(machine.current_state(), &TestState::Approved);
    }

    #[test]
    fn apply_from_illegal_state_returns_false_and_keeps_state() {
        let mut machine = StateMachine::from_config(approval_config()).unwrap();

        assert!(!machine.apply("hold"));
        assert_eq!(machine.current_state(), &TestState::Pending);
    }

    #[test]
    fn apply_unknown_action_returns_false() {
        let mut machine = StateMachine::from_config(approval_config()).unwrap();

        assert!(!machine.apply("nonexistent"));
        assert_eq!(machine.current_state(), &TestState::Pending);
    }

    #[test]
    fn can_reflects_rule_applicability() {
        let machine = StateMachine::from_config(approval_config()).unwrap();

        assert!(machine.can("approve"));
        assert!(machine.can("reject"));
        assert!(!machine.can("hold"));
        assert!(!machine.can("nonexistent"));
    }

    #[test]
    fn transitions_follow_declaration_order() {
        let mut machine = StateMachine::from_config(approval_config()).unwrap();

        assert_eq!(machine.transitions(), vec!["approve", "reject"]);

        machine.apply("approve");
        assert_eq!(machine.transitions(), vec!["hold", "reject"]);

        machine.apply("reject");
        assert_eq!(machine.transitions(), vec!["hold", "approve"]);
    }

    #[test]
    fn state_without_outgoing_rules_is_terminal_like() {
        let config = MachineConfig::new(
            TestState::Pending,
            vec![TransitionRule::new(
                "approve",
                vec![TestState::Pending],
                TestState::Approved,
            )],
        );
        let mut machine = StateMachine::from_config(config).unwrap();

        machine.apply("approve");
        assert!(machine.transitions().is_empty());
        assert!(!machine.apply("approve"));
        assert_eq!(machine.current_state(), &TestState::Approved);
    }

    #[test]
    fn overlapping_from_sets_are_evaluated_per_rule() {
        let config = MachineConfig::new(
            TestState::Pending,
            vec![
                TransitionRule::new("approve", vec![TestState::Pending], TestState::Approved),
                TransitionRule::new("reject", vec![TestState::Pending], TestState::Rejected),
            ],
        );
        let machine = StateMachine::from_config(config).unwrap();

        assert!(machine.can("approve"));
        assert!(machine.can("reject"));
        assert_eq!(machine.transitions(), vec!["approve", "reject"]);
    }

    #[test]
    fn next_state_is_pure() {
        let config = approval_config();
        let current = TestState::Pending;

        assert_eq!(
            next_state(&config.rules, &current, "approve"),
            Some(TestState::Approved)
        );
        assert_eq!(next_state(&config.rules, &current, "hold"), None);
        assert_eq!(next_state(&config.rules, &current, "nonexistent"), None);
        // Inputs untouched
        assert_eq!(current, TestState::Pending);
    }

    #[test]
    fn queries_are_idempotent() {
        let machine = StateMachine::from_config(approval_config()).unwrap();

        for _ in 0..3 {
            assert_eq!(machine.current_state(), &TestState::Pending);
            assert!(machine.is(&TestState::Pending));
            assert!(machine.can("approve"));
            assert_eq!(machine.transitions(), vec!["approve", "reject"]);
        }
    }
}
