//! The approval workflow built on the engine.
//!
//! This module is the collaborator side of the engine's contract: it owns
//! the fixed three-status approval policy, the entity record that carries a
//! persisted status, and the serializable view that exposes currently
//! available actions. The engine stays domain-agnostic; everything
//! approval-specific lives here.

mod program;
mod status;

pub use program::{Program, ProgramSummary, StatusLog};
pub use status::{approval_machine, approval_rules, Action, Status};
