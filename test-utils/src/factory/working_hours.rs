//! Working-hours factory for creating one day of a provider's calendar.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test working-hours rows.
///
/// `day_of_week` uses Sunday = 0 through Saturday = 6.
///
/// # Example
///
/// ```rust,ignore
/// let monday = WorkingHoursFactory::new(&db, provider.id, 1)
///     .hours("10:00", "18:00")
///     .build()
///     .await?;
/// ```
pub struct WorkingHoursFactory<'a> {
    db: &'a DatabaseConnection,
    provider_id: i32,
    day_of_week: i32,
    start_time: String,
    end_time: String,
    break_start: Option<String>,
    break_end: Option<String>,
    is_work_day: bool,
}

impl<'a> WorkingHoursFactory<'a> {
    /// Creates a new WorkingHoursFactory with default values.
    ///
    /// Defaults:
    /// - hours: `09:00`-`17:00`
    /// - no break
    /// - is_work_day: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `provider_id` - Provider owning the calendar
    /// - `day_of_week` - Sunday = 0 through Saturday = 6
    pub fn new(db: &'a DatabaseConnection, provider_id: i32, day_of_week: i32) -> Self {
        Self {
            db,
            provider_id,
            day_of_week,
            start_time: "09:00".to_string(),
            end_time: "17:00".to_string(),
            break_start: None,
            break_end: None,
            is_work_day: true,
        }
    }

    /// Sets opening and closing clock strings.
    pub fn hours(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_time = start.into();
        self.end_time = end.into();
        self
    }

    /// Sets the break window clock strings.
    pub fn break_window(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.break_start = Some(start.into());
        self.break_end = Some(end.into());
        self
    }

    /// Marks the day as a day off while keeping the record.
    pub fn work_day(mut self, is_work_day: bool) -> Self {
        self.is_work_day = is_work_day;
        self
    }

    /// Builds and inserts the working-hours entity into the database.
    ///
    /// Stores the clock strings verbatim so tests can seed malformed values.
    ///
    /// # Returns
    /// - `Ok(entity::working_hours::Model)` - Created working-hours entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::working_hours::Model, DbErr> {
        entity::working_hours::ActiveModel {
            id: ActiveValue::NotSet,
            provider_id: ActiveValue::Set(self.provider_id),
            day_of_week: ActiveValue::Set(self.day_of_week),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            break_start: ActiveValue::Set(self.break_start),
            break_end: ActiveValue::Set(self.break_end),
            is_work_day: ActiveValue::Set(self.is_work_day),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a 09:00-17:00 working day without break.
pub async fn create_working_hours(
    db: &DatabaseConnection,
    provider_id: i32,
    day_of_week: i32,
) -> Result<entity::working_hours::Model, DbErr> {
    WorkingHoursFactory::new(db, provider_id, day_of_week)
        .build()
        .await
}
