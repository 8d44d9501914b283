//! Event entity model and DTOs.

use notificator_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::status::EventStatus;

/// A scheduled notification row from the `events` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub name: String,
    /// `None` when the column is NULL; an empty string is kept as-is.
    pub description: Option<String>,
    /// When the event is due.
    pub date: Timestamp,
    pub status: EventStatus,
    pub date_created: Timestamp,
    /// Set by the store on the first mutation, NULL before that.
    pub date_updated: Option<Timestamp>,
}

impl Event {
    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }
}

/// DTO for creating a new event. The id is always assigned by the store.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvent {
    pub name: String,
    pub description: Option<String>,
    pub date: Timestamp,
    #[serde(default)]
    pub status: EventStatus,
    /// Defaults to the store's `NOW()` if omitted.
    pub date_created: Option<Timestamp>,
}

/// DTO for overwriting an existing event. Every field replaces the stored
/// value, so a `None` description clears the column.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEvent {
    pub name: String,
    pub description: Option<String>,
    pub date: Timestamp,
    pub status: EventStatus,
}

impl From<&Event> for UpdateEvent {
    fn from(event: &Event) -> Self {
        Self {
            name: event.name.clone(),
            description: event.description.clone(),
            date: event.date,
            status: event.status,
        }
    }
}
