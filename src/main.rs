use std::sync::Arc;

use booking_engine::{
    config::Config,
    error::AppError,
    scheduler,
    service::reminder::{LogNotifier, ReminderNotifier, ReminderWindow},
    startup,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let clock = config.time_normalizer();
    tracing::info!("Civil time zone: {}", clock.zone());

    let db = startup::connect_to_database(&config).await?;

    let notifier: Arc<dyn ReminderNotifier> = Arc::new(LogNotifier::new(clock));
    let window = ReminderWindow {
        lead: config.reminder_lead,
        width: config.reminder_window,
    };
    let mut reminders =
        scheduler::reminders::start_scheduler(db.clone(), window, &config.reminder_cron, notifier)
            .await?;

    tokio::signal::ctrl_c().await?;

    tracing::info!("Shutting down");
    reminders.shutdown().await?;
    db.close().await?;

    Ok(())
}
