//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{MachineConfig, State, StateMachine, TransitionRule};

/// Builder for constructing state machines with a fluent API.
///
/// ```rust
/// use flowstate::builder::StateMachineBuilder;
/// use flowstate::state_enum;
///
/// state_enum! {
///     enum Status {
///         Pending,
///         Approved,
///     }
/// }
///
/// let machine = StateMachineBuilder::new()
///     .initial(Status::Pending)
///     .rule("approve", vec![Status::Pending], Status::Approved)
///     .build()
///     .unwrap();
///
/// assert!(machine.is(&Status::Pending));
/// ```
pub struct StateMachineBuilder<S: State> {
    initial: Option<S>,
    rules: Vec<TransitionRule<S>>,
}

impl<S: State> StateMachineBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            rules: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a rule from its parts.
    pub fn rule(mut self, name: impl Into<String>, from: Vec<S>, to: S) -> Self {
        self.rules.push(TransitionRule::new(name, from, to));
        self
    }

    /// Add a pre-built rule.
    pub fn add_rule(mut self, rule: TransitionRule<S>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Add multiple rules at once, preserving their order.
    pub fn rules(mut self, rules: Vec<TransitionRule<S>>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Build the state machine.
    ///
    /// Fails with [`BuildError::MissingInitialState`] if `.initial()` was
    /// never called; the remaining validation (non-empty rule list, no
    /// reserved rule names) happens in [`StateMachine::from_config`].
    pub fn build(self) -> Result<StateMachine<S>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        StateMachine::from_config(MachineConfig::new(initial, self.rules))
    }
}

impl<S: State> Default for StateMachineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
