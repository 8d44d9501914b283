//! Periodic due-event report.
//!
//! Runs `EventRepo::list_current` on a fixed interval using
//! `tokio::time::interval` and logs every event that is due. Delivery and
//! status changes belong to the dispatcher, not to this loop.

use std::time::Duration;

use chrono::Utc;
use notificator_db::repositories::EventRepo;
use notificator_db::DbPool;
use tokio_util::sync::CancellationToken;

/// Run the due-event monitor until `cancel` is triggered.
pub async fn run(pool: DbPool, poll_interval: Duration, cancel: CancellationToken) {
    tracing::info!(
        interval_secs = poll_interval.as_secs(),
        "Due-event monitor started"
    );

    let mut interval = tokio::time::interval(poll_interval);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Due-event monitor stopping");
                break;
            }
            _ = interval.tick() => {
                if let Err(e) = report_due(&pool).await {
                    tracing::error!(error = %e, "Due-event query failed");
                }
            }
        }
    }
}

/// Log the currently due events. Returns how many were found.
async fn report_due(pool: &DbPool) -> Result<usize, sqlx::Error> {
    let due = EventRepo::list_current(pool).await?;
    if due.is_empty() {
        tracing::debug!("No events due");
        return Ok(0);
    }

    let now = Utc::now();
    for event in &due {
        let overdue_secs = (now - event.date).num_seconds().max(0);
        tracing::info!(
            event_id = event.id,
            name = %event.name,
            date = %event.date,
            overdue_secs,
            "Event due"
        );
    }
    tracing::info!(count = due.len(), "Due events pending dispatch");
    Ok(due.len())
}
