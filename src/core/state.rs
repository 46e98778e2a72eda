//! Core State trait for state machine states.
//!
//! All state machine states must implement this trait. The engine treats
//! states as opaque comparable values: it never inspects them beyond
//! equality, so any alphabet of states works — the three-status approval
//! workflow in [`crate::workflow`] is just one instantiation.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// States are immutable values describing where a machine currently is.
/// The engine compares them by value equality and otherwise leaves them
/// alone.
///
/// # Required Traits
///
/// - `Clone`: states are copied into and out of machines
/// - `PartialEq`: rule applicability is a membership test by equality
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states travel through configs and views
///
/// # Example
///
/// ```rust
/// use flowstate::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum ReviewState {
///     Draft,
///     InReview,
///     Published,
/// }
///
/// impl State for ReviewState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Draft => "draft",
///             Self::InReview => "in_review",
///             Self::Published => "published",
///         }
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    ///
    /// Returns a static string reference for zero-cost naming.
    fn name(&self) -> &str;
}
