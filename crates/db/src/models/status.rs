//! Completion status of an event, stored as a SMALLINT `0`/`1` flag.

use serde::{Deserialize, Serialize};

/// Status ID type matching SMALLINT in the database.
pub type StatusId = i16;

/// Whether an event is still waiting to fire or has been processed.
#[repr(i16)]
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    #[default]
    Pending = 0,
    Completed = 1,
}

impl EventStatus {
    /// Return the database status ID.
    pub fn id(self) -> StatusId {
        self as StatusId
    }

    pub fn is_completed(self) -> bool {
        self == Self::Completed
    }
}

impl From<bool> for EventStatus {
    fn from(completed: bool) -> Self {
        if completed {
            Self::Completed
        } else {
            Self::Pending
        }
    }
}

impl From<EventStatus> for bool {
    fn from(value: EventStatus) -> Self {
        value.is_completed()
    }
}

impl From<EventStatus> for StatusId {
    fn from(value: EventStatus) -> Self {
        value as StatusId
    }
}
