//! Build errors for state machine construction.

use thiserror::Error;

/// Errors that can occur when building a state machine.
///
/// All of these are raised at construction time only; a built machine has
/// no failure modes. They indicate a defect in workflow policy, so callers
/// typically treat them as fatal at startup.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No transitions defined. Add at least one rule")]
    NoTransitions,

    #[error("Rule name(s) {names:?} clash with the reserved operation names")]
    ReservedName { names: Vec<String> },
}
