//! Flowstate: a declarative finite state machine engine
//!
//! Flowstate drives status-driven workflows (approvals, reviews, moderation
//! queues) with a tiny pure core: a machine is built once from a declarative
//! configuration — an initial state plus a list of named transition rules —
//! and from then on the only way its state changes is by applying a rule
//! whose `from` set contains the current state.
//!
//! # Core Concepts
//!
//! - **State**: any opaque, comparable value implementing the `State` trait
//! - **Rule**: a named edge-set with one or more source states and exactly
//!   one destination state
//! - **Machine**: the runtime instance holding one current state, bound to
//!   one fixed rule list
//!
//! Configuration problems (missing initial state, empty rule list, rule
//! names shadowing the query operations) are rejected at construction time.
//! After construction nothing fails: an illegal or unknown transition is an
//! ordinary `false`, not an error.
//!
//! # Example
//!
//! ```rust
//! use flowstate::builder::StateMachineBuilder;
//! use flowstate::state_enum;
//!
//! state_enum! {
//!     enum Light {
//!         Red,
//!         Green,
//!     }
//! }
//!
//! let mut machine = StateMachineBuilder::new()
//!     .initial(Light::Red)
//!     .rule("go", vec![Light::Red], Light::Green)
//!     .rule("stop", vec![Light::Green], Light::Red)
//!     .build()
//!     .unwrap();
//!
//! assert!(machine.is(&Light::Red));
//! assert_eq!(machine.transitions(), vec!["go"]);
//! assert!(machine.apply("go"));
//! assert_eq!(machine.current_state(), &Light::Green);
//! assert!(!machine.apply("go"));
//! ```

pub mod builder;
pub mod core;
pub mod workflow;

// Re-export commonly used types
pub use crate::builder::{BuildError, StateMachineBuilder};
pub use crate::core::{next_state, MachineConfig, State, StateMachine, TransitionRule};
