use chrono::Duration;

use crate::error::AppError;

/// A bookable service offered by one provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub id: i32,
    pub provider_id: i32,
    pub name: String,
    /// Length of the appointment itself.
    pub duration: Duration,
    /// Idle time the provider needs after each appointment.
    pub buffer: Duration,
}

impl Service {
    /// Converts an entity model to a service domain model.
    ///
    /// # Returns
    /// - `Ok(Service)` - The converted service
    /// - `Err(AppError::Validation)` - Duration is not positive or buffer is negative
    pub fn from_entity(entity: entity::service::Model) -> Result<Self, AppError> {
        if entity.duration_minutes <= 0 {
            return Err(AppError::Validation(format!(
                "Service {} has non-positive duration {}",
                entity.id, entity.duration_minutes
            )));
        }
        if entity.buffer_minutes < 0 {
            return Err(AppError::Validation(format!(
                "Service {} has negative buffer {}",
                entity.id, entity.buffer_minutes
            )));
        }

        Ok(Self {
            id: entity.id,
            provider_id: entity.provider_id,
            name: entity.name,
            duration: Duration::minutes(entity.duration_minutes as i64),
            buffer: Duration::minutes(entity.buffer_minutes as i64),
        })
    }

    /// Time a booking of this service occupies on the provider's calendar.
    pub fn slot_length(&self) -> Duration {
        self.duration + self.buffer
    }
}
