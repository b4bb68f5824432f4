use anyhow::Context;
use tracing::info;

use scheduler::config::AppConfig;
use scheduler::generation::run_generation_sweeper;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let config = AppConfig::load().context("Failed to load config")?;

    let db = scheduler::database::init_db(&config.database.url)
        .await
        .context("Failed to initialize database")?;
    scheduler::seed::ensure_indexes(&db)
        .await
        .context("Failed to create indexes")?;

    info!("Database connected");

    run_generation_sweeper(db, config.generation).await;

    Ok(())
}
