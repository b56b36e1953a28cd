//! Appointment factory for seeding existing bookings.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test appointments.
///
/// Writes rows directly, bypassing every engine check, so tests can seed overlapping or
/// otherwise impossible states on purpose.
///
/// # Example
///
/// ```rust,ignore
/// let appointment = AppointmentFactory::new(&db, &service, customer.id)
///     .start(start)
///     .status("confirmed")
///     .build()
///     .await?;
/// ```
pub struct AppointmentFactory<'a> {
    db: &'a DatabaseConnection,
    service_id: i32,
    provider_id: i32,
    customer_id: i32,
    title: String,
    description: String,
    start_time: DateTime<Utc>,
    duration: Duration,
    status: String,
    is_recurring: bool,
}

impl<'a> AppointmentFactory<'a> {
    /// Creates a new AppointmentFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Appointment {id}"`
    /// - start_time: 1 day from now
    /// - duration: the service duration
    /// - status: `"pending"`
    /// - not recurring
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `service` - Service booked; also provides the provider
    /// - `customer_id` - Customer the appointment is for
    pub fn new(
        db: &'a DatabaseConnection,
        service: &entity::service::Model,
        customer_id: i32,
    ) -> Self {
        Self {
            db,
            service_id: service.id,
            provider_id: service.provider_id,
            customer_id,
            title: format!("Appointment {}", next_id()),
            description: "Test appointment".to_string(),
            start_time: Utc::now() + Duration::days(1),
            duration: Duration::minutes(service.duration_minutes as i64),
            status: "pending".to_string(),
            is_recurring: false,
        }
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the start instant; the end follows from the duration.
    pub fn start(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    /// Overrides the length of the appointment.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the raw status string.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Marks the appointment as recurring without linking a recurrence record.
    pub fn recurring(mut self, is_recurring: bool) -> Self {
        self.is_recurring = is_recurring;
        self
    }

    /// Builds and inserts the appointment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::appointment::Model)` - Created appointment entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::appointment::Model, DbErr> {
        entity::appointment::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.start_time + self.duration),
            status: ActiveValue::Set(self.status),
            is_recurring: ActiveValue::Set(self.is_recurring),
            recurrence_id: ActiveValue::Set(None),
            service_id: ActiveValue::Set(self.service_id),
            provider_id: ActiveValue::Set(self.provider_id),
            customer_id: ActiveValue::Set(self.customer_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending appointment starting at `start_time`.
pub async fn create_appointment(
    db: &DatabaseConnection,
    service: &entity::service::Model,
    customer_id: i32,
    start_time: DateTime<Utc>,
) -> Result<entity::appointment::Model, DbErr> {
    AppointmentFactory::new(db, service, customer_id)
        .start(start_time)
        .build()
        .await
}
