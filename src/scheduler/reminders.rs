use chrono::Utc;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::AppError,
    service::reminder::{ReminderNotifier, ReminderService, ReminderWindow},
};

/// Starts the reminder scheduler
///
/// Each run picks up confirmed appointments starting inside the reminder window of its
/// scheduled tick and hands them to the notifier.
///
/// # Arguments
/// - `db`: Database connection
/// - `window`: Lead time and width of the reminder window
/// - `schedule`: Cron expression (with seconds) for how often to run
/// - `notifier`: Delivers the reminders
///
/// # Returns
/// - `Ok(JobScheduler)`: Running scheduler; call `shutdown` to stop it
/// - `Err(AppError::SchedulerErr)`: Invalid cron expression or scheduler failure
pub async fn start_scheduler(
    db: DatabaseConnection,
    window: ReminderWindow,
    schedule: &str,
    notifier: Arc<dyn ReminderNotifier>,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let db = db.clone();
        let notifier = notifier.clone();

        Box::pin(async move {
            let service = ReminderService::new(&db, window);
            match service.send_due(Utc::now(), notifier.as_ref()).await {
                Ok(0) => {}
                Ok(sent) => tracing::info!("Sent {} appointment reminders", sent),
                Err(e) => tracing::error!("Error processing appointment reminders: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Reminder scheduler started with schedule '{}'", schedule);

    Ok(scheduler)
}
