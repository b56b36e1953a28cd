//! Recurrence factory for seeding recurrence chains.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, IntoActiveModel};

/// Factory for creating a recurrence record and linking it to its appointment.
///
/// `build()` also flips the appointment to `is_recurring = true` and points its
/// `recurrence_id` at the new record, matching what a recurring booking produces.
///
/// # Example
///
/// ```rust,ignore
/// let (appointment, recurrence) = RecurrenceFactory::new(&db, appointment)
///     .frequency("daily")
///     .remaining(Some(3))
///     .build()
///     .await?;
/// ```
pub struct RecurrenceFactory<'a> {
    db: &'a DatabaseConnection,
    appointment: entity::appointment::Model,
    frequency: String,
    remaining_occurrences: Option<i32>,
}

impl<'a> RecurrenceFactory<'a> {
    /// Creates a new RecurrenceFactory with default values.
    ///
    /// Defaults:
    /// - frequency: `"weekly"`
    /// - remaining_occurrences: `None` (unbounded)
    pub fn new(db: &'a DatabaseConnection, appointment: entity::appointment::Model) -> Self {
        Self {
            db,
            appointment,
            frequency: "weekly".to_string(),
            remaining_occurrences: None,
        }
    }

    /// Sets the raw frequency string.
    pub fn frequency(mut self, frequency: impl Into<String>) -> Self {
        self.frequency = frequency.into();
        self
    }

    /// Sets the remaining occurrence counter (`None` = unbounded).
    pub fn remaining(mut self, remaining: Option<i32>) -> Self {
        self.remaining_occurrences = remaining;
        self
    }

    /// Inserts the recurrence and links the appointment to it.
    ///
    /// # Returns
    /// - `Ok((appointment, recurrence))` - Updated appointment and created recurrence
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn build(
        self,
    ) -> Result<(entity::appointment::Model, entity::recurrence::Model), DbErr> {
        let recurrence = entity::recurrence::ActiveModel {
            id: ActiveValue::NotSet,
            appointment_id: ActiveValue::Set(self.appointment.id),
            frequency: ActiveValue::Set(self.frequency),
            next_run: ActiveValue::Set(self.appointment.start_time),
            remaining_occurrences: ActiveValue::Set(self.remaining_occurrences),
            version: ActiveValue::Set(0),
        }
        .insert(self.db)
        .await?;

        let mut appointment = self.appointment.into_active_model();
        appointment.is_recurring = ActiveValue::Set(true);
        appointment.recurrence_id = ActiveValue::Set(Some(recurrence.id));
        let appointment = appointment.update(self.db).await?;

        Ok((appointment, recurrence))
    }
}

/// Creates an unbounded weekly recurrence for the appointment.
pub async fn create_recurrence(
    db: &DatabaseConnection,
    appointment: entity::appointment::Model,
) -> Result<(entity::appointment::Model, entity::recurrence::Model), DbErr> {
    RecurrenceFactory::new(db, appointment).build().await
}
