//! Repository for the `events` table.

use notificator_core::types::DbId;
use sqlx::PgPool;

use crate::models::event::{CreateEvent, Event, UpdateEvent};
use crate::models::status::EventStatus;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, date, status, date_created, date_updated";

/// Provides CRUD operations and the due-event query for events.
///
/// Every method runs exactly one statement on a connection checked out of
/// the pool for that statement only. A missing id is never an error: reads
/// return `None` and writes report that nothing changed.
pub struct EventRepo;

impl EventRepo {
    /// List every event ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events ORDER BY id");
        sqlx::query_as::<_, Event>(&query).fetch_all(pool).await
    }

    /// Find an event by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List pending events whose date has been reached, oldest first.
    ///
    /// "Now" is the database clock, so every process polling the table
    /// agrees on which events are due regardless of local clock drift.
    pub async fn list_current(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events \
             WHERE status = $1 AND date <= NOW() \
             ORDER BY date, id"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(EventStatus::Pending)
            .fetch_all(pool)
            .await
    }

    /// Insert a new event, returning the created row with its assigned ID.
    ///
    /// If `date_created` is `None` in the input, the database clock is used.
    /// `date_updated` always starts out NULL.
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events (name, description, date, status, date_created)
             VALUES ($1, $2, $3, $4, COALESCE($5, NOW()))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.date)
            .bind(input.status)
            .bind(input.date_created)
            .fetch_one(pool)
            .await
    }

    /// Overwrite name, description, date and status of an event.
    ///
    /// `date_created` is left untouched and `date_updated` is stamped with
    /// the database clock. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEvent,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET
                name = $2,
                description = $3,
                date = $4,
                status = $5,
                date_updated = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.date)
            .bind(input.status)
            .fetch_optional(pool)
            .await
    }

    /// Mark an event as completed. Returns `true` if a pending row was
    /// transitioned.
    ///
    /// Already-completed rows are not matched, so repeating the call leaves
    /// the row (including `date_updated`) exactly as the first call did.
    pub async fn update_status(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE events SET status = $2, date_updated = NOW() \
             WHERE id = $1 AND status <> $2",
        )
        .bind(id)
        .bind(EventStatus::Completed)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete an event by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
