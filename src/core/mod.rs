//! Core state machine types and logic.
//!
//! This module contains the pure core of the engine:
//! - State values via the `State` trait
//! - Named transition rules over those values
//! - The machine itself, plus the pure `next_state` lookup it is built on
//!
//! Nothing in this module performs I/O or blocks; every operation is a
//! plain computation over the rule list.

mod machine;
mod rule;
mod state;

pub use machine::{next_state, MachineConfig, StateMachine, RESERVED_NAMES};
pub use rule::TransitionRule;
pub use state::State;
