//! `carhire-seed`: apply migrations and insert any missing demo data.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use carhire_api::seed::{self, SeedConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "carhire_api=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = carhire_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;

    carhire_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let report = seed::run(&pool, &SeedConfig::from_env()).await?;
    tracing::info!(
        admin_created = report.admin_created,
        settings_inserted = report.settings_inserted,
        cars_inserted = report.cars_inserted,
        leads_inserted = report.leads_inserted,
        "Seed complete"
    );

    pool.close().await;
    Ok(())
}
