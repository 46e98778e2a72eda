//! The program entity: a titled record carrying an approval status.
//!
//! The entity keeps no durable machine. Whenever it needs to transition or
//! to answer "what can happen now", it rebuilds an engine from its
//! persisted status and the fixed policy, then copies the result back.
//! Log-keeping lives here, on the entity, not in the engine.

use super::status::{approval_machine, Action, Status};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One entry of the entity's status history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusLog {
    pub status: Status,
    pub date: DateTime<Utc>,
}

/// A program moving through the approval workflow.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Program {
    pub id: Uuid,
    pub title: String,
    pub status: Status,
    pub logs: Vec<StatusLog>,
    pub created_at: DateTime<Utc>,
}

impl Program {
    /// Create a new pending program.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_status(title, Status::Pending)
    }

    /// Create a program in a specific status, e.g. when rehydrating a
    /// stored record. The log is seeded with the starting status.
    pub fn with_status(title: impl Into<String>, status: Status) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            status: status.clone(),
            logs: vec![StatusLog { status, date: now }],
            created_at: now,
        }
    }

    /// Attempt to move this program through the given action.
    ///
    /// Rebuilds an engine from the current status, applies the action, and
    /// on success copies the new status back and appends a log entry. A
    /// `false` return means the action is not legal right now and the
    /// program is untouched.
    pub fn transition(&mut self, action: Action) -> bool {
        let mut machine = approval_machine(self.status.clone());

        if machine.apply(action.as_str()) {
            self.status = machine.current_state().clone();
            self.logs.push(StatusLog {
                status: self.status.clone(),
                date: Utc::now(),
            });
            return true;
        }

        false
    }

    /// The actions legal from the current status, in policy order.
    pub fn available_actions(&self) -> Vec<Action> {
        approval_machine(self.status.clone())
            .transitions()
            .into_iter()
            .filter_map(Action::from_name)
            .collect()
    }

    /// The serializable view the API layer exposes per program.
    pub fn summary(&self) -> ProgramSummary {
        ProgramSummary {
            id: self.id,
            title: self.title.clone(),
            status: self.status.clone(),
            transitions: self.available_actions(),
        }
    }
}

/// Per-program API response shape: identity, status, and the actions a
/// client may take next.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProgramSummary {
    pub id: Uuid,
    pub title: String,
    pub status: Status,
    pub transitions: Vec<Action>,
}
