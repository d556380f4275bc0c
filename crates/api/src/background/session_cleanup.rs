//! Periodic removal of expired admin sessions.
//!
//! Expired rows are already ignored by session lookups; this job only keeps
//! the table from growing without bound.

use std::time::Duration;

use carhire_db::repositories::AdminSessionRepo;
use sqlx::PgPool;
use tokio_util::sync::CancellationToken;

/// How often the cleanup job runs.
pub const CLEANUP_INTERVAL: Duration = Duration::from_secs(3600);

/// Run the cleanup loop until `cancel` is triggered.
///
/// The first pass runs immediately on start.
pub async fn run(pool: PgPool, cancel: CancellationToken) {
    run_every(pool, cancel, CLEANUP_INTERVAL).await;
}

/// [`run`] with a custom interval.
pub async fn run_every(pool: PgPool, cancel: CancellationToken, every: Duration) {
    tracing::info!(
        interval_secs = every.as_secs(),
        "Session cleanup job started"
    );

    let mut interval = tokio::time::interval(every);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Session cleanup job stopping");
                break;
            }
            _ = interval.tick() => {
                match AdminSessionRepo::delete_expired(&pool).await {
                    Ok(deleted) => {
                        if deleted > 0 {
                            tracing::info!(deleted, "Session cleanup: purged expired sessions");
                        } else {
                            tracing::debug!("Session cleanup: nothing to purge");
                        }
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Session cleanup: delete failed");
                    }
                }
            }
        }
    }
}
