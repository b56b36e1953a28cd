//! Service factory for creating bookable services.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test services with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let service = ServiceFactory::new(&db, provider.id)
///     .duration_minutes(45)
///     .buffer_minutes(15)
///     .build()
///     .await?;
/// ```
pub struct ServiceFactory<'a> {
    db: &'a DatabaseConnection,
    provider_id: i32,
    name: String,
    duration_minutes: i32,
    buffer_minutes: i32,
}

impl<'a> ServiceFactory<'a> {
    /// Creates a new ServiceFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Service {id}"`
    /// - duration_minutes: `30`
    /// - buffer_minutes: `0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `provider_id` - Provider offering the service
    pub fn new(db: &'a DatabaseConnection, provider_id: i32) -> Self {
        Self {
            db,
            provider_id,
            name: format!("Service {}", next_id()),
            duration_minutes: 30,
            buffer_minutes: 0,
        }
    }

    /// Sets the service name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the length of one booking in minutes.
    pub fn duration_minutes(mut self, minutes: i32) -> Self {
        self.duration_minutes = minutes;
        self
    }

    /// Sets the idle time appended after each booking.
    pub fn buffer_minutes(mut self, minutes: i32) -> Self {
        self.buffer_minutes = minutes;
        self
    }

    /// Builds and inserts the service entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::service::Model)` - Created service entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::service::Model, DbErr> {
        entity::service::ActiveModel {
            id: ActiveValue::NotSet,
            provider_id: ActiveValue::Set(self.provider_id),
            name: ActiveValue::Set(self.name),
            duration_minutes: ActiveValue::Set(self.duration_minutes),
            buffer_minutes: ActiveValue::Set(self.buffer_minutes),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a 30 minute service without buffer for the given provider.
pub async fn create_service(
    db: &DatabaseConnection,
    provider_id: i32,
) -> Result<entity::service::Model, DbErr> {
    ServiceFactory::new(db, provider_id).build().await
}
