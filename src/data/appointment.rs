use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::model::appointment::{
    AppointmentStatus, CreateAppointmentParams, UpdateAppointmentParams,
};

pub struct AppointmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AppointmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new appointment
    ///
    /// # Arguments
    /// - `params`: Appointment values; `created_at` is set to now
    ///
    /// # Returns
    /// - `Ok(Model)`: The created appointment
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        params: CreateAppointmentParams,
    ) -> Result<entity::appointment::Model, DbErr> {
        entity::appointment::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            start_time: ActiveValue::Set(params.start_time),
            end_time: ActiveValue::Set(params.end_time),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            is_recurring: ActiveValue::Set(params.is_recurring),
            recurrence_id: ActiveValue::Set(params.recurrence_id),
            service_id: ActiveValue::Set(params.service_id),
            provider_id: ActiveValue::Set(params.provider_id),
            customer_id: ActiveValue::Set(params.customer_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets an appointment by ID
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Appointment found
    /// - `Ok(None)`: Appointment not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::appointment::Model>, DbErr> {
        entity::prelude::Appointment::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets an appointment by ID and locks its row until the surrounding transaction ends
    ///
    /// Backends without row locks (SQLite) ignore the lock clause; there the transaction
    /// itself serializes writers.
    pub async fn lock_by_id(&self, id: i32) -> Result<Option<entity::appointment::Model>, DbErr> {
        entity::prelude::Appointment::find_by_id(id)
            .lock_exclusive()
            .one(self.db)
            .await
    }

    /// Finds and locks a provider's appointments overlapping `[start, end)`
    ///
    /// Two intervals overlap when `existing.start < end` and `existing.end > start`, so
    /// back-to-back appointments never collide.
    ///
    /// # Arguments
    /// - `provider_id`: Provider whose calendar is checked
    /// - `start`: Candidate start
    /// - `end`: Candidate end, buffer included
    /// - `excluded_statuses`: Statuses that do not occupy the slot
    /// - `exclude_id`: Appointment to ignore, used when it is being moved
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: Overlapping appointments ordered by start time
    /// - `Err(DbErr)`: Database error
    pub async fn lock_overlapping(
        &self,
        provider_id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        excluded_statuses: &[AppointmentStatus],
        exclude_id: Option<i32>,
    ) -> Result<Vec<entity::appointment::Model>, DbErr> {
        let mut query = entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::ProviderId.eq(provider_id))
            .filter(
                entity::appointment::Column::Status
                    .is_not_in(excluded_statuses.iter().map(|status| status.as_str())),
            )
            .filter(entity::appointment::Column::StartTime.lt(end))
            .filter(entity::appointment::Column::EndTime.gt(start));

        if let Some(id) = exclude_id {
            query = query.filter(entity::appointment::Column::Id.ne(id));
        }

        query
            .order_by_asc(entity::appointment::Column::StartTime)
            .lock_exclusive()
            .all(self.db)
            .await
    }

    /// Gets a provider's active appointments overlapping `[from, to)`
    ///
    /// Completed and canceled appointments are left out.
    pub async fn get_active_by_provider_between(
        &self,
        provider_id: i32,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<entity::appointment::Model>, DbErr> {
        entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::ProviderId.eq(provider_id))
            .filter(
                entity::appointment::Column::Status.is_not_in(
                    AppointmentStatus::NON_BLOCKING
                        .iter()
                        .map(|status| status.as_str()),
                ),
            )
            .filter(entity::appointment::Column::StartTime.lt(to))
            .filter(entity::appointment::Column::EndTime.gt(from))
            .order_by_asc(entity::appointment::Column::StartTime)
            .all(self.db)
            .await
    }

    /// Gets upcoming appointments for a provider (start_time >= from)
    ///
    /// # Arguments
    /// - `provider_id`: Provider ID
    /// - `from`: Earliest start time to include
    /// - `limit`: Maximum number of appointments to return
    ///
    /// # Returns
    /// - `Ok(appointments)`: Upcoming pending or confirmed appointments, soonest first
    /// - `Err(DbErr)`: Database error
    pub async fn get_upcoming_by_provider(
        &self,
        provider_id: i32,
        from: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<entity::appointment::Model>, DbErr> {
        entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::ProviderId.eq(provider_id))
            .filter(
                entity::appointment::Column::Status.is_not_in(
                    AppointmentStatus::NON_BLOCKING
                        .iter()
                        .map(|status| status.as_str()),
                ),
            )
            .filter(entity::appointment::Column::StartTime.gte(from))
            .order_by_asc(entity::appointment::Column::StartTime)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Gets appointments with the given status starting within `[from, to)`
    pub async fn get_by_status_starting_between(
        &self,
        status: AppointmentStatus,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<entity::appointment::Model>, DbErr> {
        entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::Status.eq(status.as_str()))
            .filter(entity::appointment::Column::StartTime.gte(from))
            .filter(entity::appointment::Column::StartTime.lt(to))
            .order_by_asc(entity::appointment::Column::StartTime)
            .all(self.db)
            .await
    }

    /// Gets every appointment of a recurring chain, oldest first
    pub async fn get_by_recurrence(
        &self,
        recurrence_id: i32,
    ) -> Result<Vec<entity::appointment::Model>, DbErr> {
        entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::RecurrenceId.eq(recurrence_id))
            .order_by_asc(entity::appointment::Column::StartTime)
            .all(self.db)
            .await
    }

    /// Updates an appointment
    ///
    /// # Arguments
    /// - `params`: Fields to change; `None` leaves a field as is
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated appointment
    /// - `Err(DbErr::RecordNotFound)`: No appointment with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn update(
        &self,
        params: UpdateAppointmentParams,
    ) -> Result<entity::appointment::Model, DbErr> {
        let appointment = entity::prelude::Appointment::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Appointment {} not found",
                params.id
            )))?;

        let mut active_model: entity::appointment::ActiveModel = appointment.into();

        if let Some(status) = params.status {
            active_model.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(start_time) = params.start_time {
            active_model.start_time = ActiveValue::Set(start_time);
        }
        if let Some(end_time) = params.end_time {
            active_model.end_time = ActiveValue::Set(end_time);
        }

        active_model.update(self.db).await
    }

    /// Links an appointment to a recurrence record and marks it recurring
    pub async fn set_recurrence(
        &self,
        id: i32,
        recurrence_id: i32,
    ) -> Result<entity::appointment::Model, DbErr> {
        entity::appointment::ActiveModel {
            id: ActiveValue::Unchanged(id),
            is_recurring: ActiveValue::Set(true),
            recurrence_id: ActiveValue::Set(Some(recurrence_id)),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    /// Deletes an appointment by ID
    ///
    /// # Returns
    /// - `Ok(())`: Appointment deleted (or did not exist)
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Appointment::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
