use anyhow::Context;
use notificator_db::DbConfig;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod monitor;

use config::WorkerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "notificator_worker=debug,notificator_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let db_config = DbConfig::from_env().context("Invalid database configuration")?;
    let worker_config = WorkerConfig::from_env().context("Invalid worker configuration")?;
    tracing::info!(
        poll_interval_secs = worker_config.poll_interval.as_secs(),
        max_connections = db_config.max_connections,
        "Loaded worker configuration"
    );

    // --- Database ---
    let pool = notificator_db::create_pool(&db_config)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connection pool created");

    notificator_db::health_check(&pool)
        .await
        .context("Database health check failed")?;
    tracing::info!("Database health check passed");

    // --- Monitor ---
    let cancel = CancellationToken::new();
    let monitor_handle = tokio::spawn(monitor::run(
        pool.clone(),
        worker_config.poll_interval,
        cancel.clone(),
    ));

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for shutdown signal")?;
    tracing::info!("Shutdown signal received");

    cancel.cancel();
    if let Err(e) = monitor_handle.await {
        tracing::error!(error = %e, "Due-event monitor task panicked");
    }

    pool.close().await;
    tracing::info!("Worker stopped");
    Ok(())
}
