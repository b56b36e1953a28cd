//! Upcoming-appointment reminders.

use async_trait::async_trait;
use chrono::{DateTime, Duration, DurationRound, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::appointment::AppointmentRepository,
    error::AppError,
    model::appointment::{Appointment, AppointmentStatus},
    service::time::TimeNormalizer,
};

/// Delivers a reminder for one appointment.
#[async_trait]
pub trait ReminderNotifier: Send + Sync {
    async fn notify(&self, appointment: &Appointment) -> Result<(), AppError>;
}

/// Notifier that only writes the reminder to the log, with the start in civil time.
pub struct LogNotifier {
    clock: TimeNormalizer,
}

impl LogNotifier {
    pub fn new(clock: TimeNormalizer) -> Self {
        Self { clock }
    }
}

#[async_trait]
impl ReminderNotifier for LogNotifier {
    async fn notify(&self, appointment: &Appointment) -> Result<(), AppError> {
        tracing::info!(
            "Reminder: appointment {} '{}' for customer {} with provider {} starts at {}",
            appointment.id,
            appointment.title,
            appointment.customer_id,
            appointment.provider_id,
            self.clock.normalize(&appointment.start_time)
        );
        Ok(())
    }
}

/// Which appointments a reminder pass picks up.
///
/// A pass at `now` first rounds `now` down to a multiple of `width`, giving the tick the
/// pass was scheduled for, and covers starts in `[tick + lead, tick + lead + width)`.
/// When passes are scheduled every `width` the windows of consecutive passes line up
/// exactly, however late each pass actually starts within its tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderWindow {
    pub lead: Duration,
    pub width: Duration,
}

impl ReminderWindow {
    /// Gets the half-open range of starts covered by a pass running at `now`
    ///
    /// # Returns
    /// - `Ok((from, to))`: Window bounds
    /// - `Err(AppError::Validation)`: `width` is not a positive duration
    pub fn bounds(&self, now: DateTime<Utc>) -> Result<(DateTime<Utc>, DateTime<Utc>), AppError> {
        if self.width <= Duration::zero() {
            return Err(AppError::Validation(format!(
                "Reminder window must be positive, got {}",
                self.width
            )));
        }

        let tick = now.duration_trunc(self.width).map_err(|e| {
            AppError::Validation(format!("Invalid reminder window {}: {}", self.width, e))
        })?;
        let from = tick + self.lead;

        Ok((from, from + self.width))
    }
}

pub struct ReminderService<'a> {
    db: &'a DatabaseConnection,
    window: ReminderWindow,
}

impl<'a> ReminderService<'a> {
    pub fn new(db: &'a DatabaseConnection, window: ReminderWindow) -> Self {
        Self { db, window }
    }

    /// Gets confirmed appointments whose reminder is due at `now`
    ///
    /// # Returns
    /// - `Ok(Vec<Appointment>)`: Appointments starting inside the window, soonest first
    /// - `Err(AppError)`: Database error
    pub async fn due_reminders(&self, now: DateTime<Utc>) -> Result<Vec<Appointment>, AppError> {
        let (from, to) = self.window.bounds(now)?;

        AppointmentRepository::new(self.db)
            .get_by_status_starting_between(AppointmentStatus::Confirmed, from, to)
            .await?
            .into_iter()
            .map(Appointment::from_entity)
            .collect()
    }

    /// Sends every reminder due at `now`
    ///
    /// A failed delivery is logged and does not stop the remaining ones.
    ///
    /// # Returns
    /// - `Ok(usize)`: Number of reminders delivered
    /// - `Err(AppError)`: Database error while finding due appointments
    pub async fn send_due(
        &self,
        now: DateTime<Utc>,
        notifier: &dyn ReminderNotifier,
    ) -> Result<usize, AppError> {
        let mut sent = 0;

        for appointment in self.due_reminders(now).await? {
            match notifier.notify(&appointment).await {
                Ok(()) => sent += 1,
                Err(e) => tracing::error!(
                    "Failed to send reminder for appointment {}: {}",
                    appointment.id,
                    e
                ),
            }
        }

        Ok(sent)
    }
}
