use academy_lib::shared::utils::logger::{init_logger, TimedOperation};
use academy_lib::shared::AppConfig;
use academy_lib::AppContext;
use anyhow::Context;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let config = AppConfig::from_env().context("Failed to load configuration")?;

    let context = {
        let timer = TimedOperation::new("bootstrap");
        let context = tokio::task::spawn_blocking(move || AppContext::bootstrap(&config))
            .await
            .context("Database bootstrap task failed")?
            .context("Failed to connect to database")?;
        timer.finish();
        context
    };
    let context = Arc::new(context);

    {
        let context = Arc::clone(&context);
        let timer = TimedOperation::new("migrations");
        let applied = tokio::task::spawn_blocking(move || match context.database() {
            Some(database) => database?.run_migrations(),
            None => Ok(0),
        })
        .await
        .context("Migration task failed")?
        .context("Failed to run database migrations")?;
        timer.finish_with_info(&format!("{} applied", applied));
    }

    let stats = context
        .course_service()
        .stats()
        .await
        .context("Failed to read course statistics")?;
    log::info!(
        "Catalogue: {} courses ({} published, {} drafts, {} featured), {} of published content",
        stats.total,
        stats.published,
        stats.drafts,
        stats.featured,
        stats.published_duration_label
    );
    for (difficulty, count) in &stats.by_difficulty {
        log::debug!("  {}: {}", difficulty.display_name(), count);
    }

    context.shutdown();
    log::info!("{}", context.database_status());
    Ok(())
}
