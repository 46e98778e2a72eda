//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and a macro for creating machines
//! with minimal boilerplate. All construction-time validation surfaces
//! here as [`BuildError`].

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
