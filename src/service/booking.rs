//! Reservation, status change, rescheduling, and deletion of appointments.
//!
//! Every write runs in a single transaction. Rejections roll back whatever the
//! transaction had done, so a refused request never leaves partial state behind.

use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    data::{appointment::AppointmentRepository, service::ServiceRepository, user::UserRepository},
    error::AppError,
    model::{
        appointment::{
            Appointment, AppointmentStatus, CreateAppointmentParams, ReserveAppointmentParams,
            UpdateAppointmentParams,
        },
        service::Service,
    },
    service::{
        availability::AvailabilityService, calendar::CalendarService,
        lifecycle::AppointmentLifecycle, recurrence::RecurrenceGenerator, time::TimeNormalizer,
    },
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
    clock: TimeNormalizer,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection, clock: TimeNormalizer) -> Self {
        Self { db, clock }
    }

    /// Reserves an appointment after checking calendar and availability
    ///
    /// The requested start is normalized to the civil zone and checked against the
    /// provider's working hours. Availability is checked once up front and again inside
    /// the write transaction while it holds the provider's calendar lock, so of two
    /// concurrent requests for overlapping slots exactly one succeeds.
    ///
    /// # Arguments
    /// - `params`: Reservation request, optionally starting a recurring chain
    ///
    /// # Returns
    /// - `Ok(Appointment)`: The new pending appointment
    /// - `Err(AppError::Validation)`: Empty title or invalid recurrence settings
    /// - `Err(AppError::NotFound)`: Provider, customer, or service is missing
    /// - `Err(AppError::OutOfHours)`: Start is outside working hours or in the break
    /// - `Err(AppError::Conflict)`: Slot overlaps an active appointment
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn validate_and_reserve(
        &self,
        params: ReserveAppointmentParams,
    ) -> Result<Appointment, AppError> {
        if params.title.trim().is_empty() {
            return Err(AppError::Validation(
                "Appointment title is required".to_string(),
            ));
        }
        if let Some(recurrence) = &params.recurrence {
            recurrence.remaining_occurrences()?;
        }

        let users = UserRepository::new(self.db);
        if !users.exists(params.provider_id).await? {
            return Err(AppError::NotFound(format!(
                "Provider {} not found",
                params.provider_id
            )));
        }
        if !users.exists(params.customer_id).await? {
            return Err(AppError::NotFound(format!(
                "Customer {} not found",
                params.customer_id
            )));
        }
        let service = self
            .provider_service(self.db, params.service_id, params.provider_id)
            .await?;

        let start = self.clock.normalize(&params.requested_start);

        if !CalendarService::new(self.db, self.clock)
            .is_within_working_hours(params.provider_id, &start)
            .await?
        {
            tracing::debug!(
                "Rejected reservation for provider {} at {}: outside working hours",
                params.provider_id,
                start
            );
            return Err(AppError::OutOfHours);
        }

        if !AvailabilityService::new(self.db, self.clock)
            .check_availability(params.provider_id, &start, service.slot_length())
            .await?
        {
            return Err(AppError::Conflict);
        }

        let txn = self.db.begin().await?;

        let availability = AvailabilityService::new(&txn, self.clock);
        availability.lock_calendar(params.provider_id).await?;
        if !availability
            .is_slot_free(params.provider_id, &start, service.slot_length(), None)
            .await?
        {
            txn.rollback().await?;
            tracing::debug!(
                "Rejected reservation for provider {} at {}: slot taken during reservation",
                params.provider_id,
                start
            );
            return Err(AppError::Conflict);
        }

        let start = start.with_timezone(&Utc);
        let created = AppointmentRepository::new(&txn)
            .create(CreateAppointmentParams {
                title: params.title,
                description: params.description,
                start_time: start,
                end_time: start + service.duration,
                status: AppointmentStatus::Pending,
                is_recurring: false,
                recurrence_id: None,
                service_id: service.id,
                provider_id: params.provider_id,
                customer_id: params.customer_id,
            })
            .await?;
        let mut appointment = Appointment::from_entity(created)?;

        if let Some(request) = params.recurrence {
            let (linked, recurrence) = RecurrenceGenerator::new(&txn, self.clock)
                .start_chain(&appointment, request)
                .await?;
            tracing::info!(
                "Started {} recurrence {} with appointment {}",
                recurrence.frequency,
                recurrence.id,
                linked.id
            );
            appointment = linked;
        }

        txn.commit().await?;

        tracing::info!(
            "Reserved appointment {} for provider {} at {}",
            appointment.id,
            appointment.provider_id,
            appointment.start_time
        );

        Ok(appointment)
    }

    /// Changes the status of an appointment
    ///
    /// The provider's calendar and the appointment row are locked for the whole
    /// transaction. Completing a recurring appointment generates its successor in the same
    /// transaction.
    ///
    /// # Arguments
    /// - `id`: Appointment ID
    /// - `status`: Requested status
    ///
    /// # Returns
    /// - `Ok(Appointment)`: The updated appointment
    /// - `Err(AppError::NotFound)`: No appointment with that ID
    /// - `Err(AppError::InvalidTransition)`: Transition not allowed
    /// - `Err(AppError)`: Recurrence generation or database error
    pub async fn transition_status(
        &self,
        id: i32,
        status: AppointmentStatus,
    ) -> Result<Appointment, AppError> {
        let current = self.get_by_id(id).await?;
        let txn = self.db.begin().await?;

        AvailabilityService::new(&txn, self.clock)
            .lock_calendar(current.provider_id)
            .await?;
        let appointment = Self::lock_appointment(&txn, id).await?;
        let change = AppointmentLifecycle::new(&txn, self.clock)
            .transition(&appointment, status)
            .await?;

        txn.commit().await?;

        Ok(change.appointment)
    }

    /// Moves a pending or confirmed appointment to a new start
    ///
    /// The appointment keeps its service duration. The new slot must be in the future,
    /// within working hours, and free apart from the appointment itself.
    ///
    /// # Arguments
    /// - `id`: Appointment ID
    /// - `new_start`: Requested start, in any zone
    ///
    /// # Returns
    /// - `Ok(Appointment)`: The moved appointment
    /// - `Err(AppError::PastTime)`: New start is before now
    /// - `Err(AppError::NotFound)`: Appointment or its service is missing
    /// - `Err(AppError::NotReschedulable)`: Appointment is completed or canceled
    /// - `Err(AppError::OutOfHours)`: New start is outside working hours
    /// - `Err(AppError::Conflict)`: New slot overlaps another active appointment
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn reschedule(
        &self,
        id: i32,
        new_start: DateTime<FixedOffset>,
    ) -> Result<Appointment, AppError> {
        let start = self.clock.normalize(&new_start);
        if start.with_timezone(&Utc) < Utc::now() {
            return Err(AppError::PastTime);
        }

        let current = self.get_by_id(id).await?;
        let txn = self.db.begin().await?;

        let availability = AvailabilityService::new(&txn, self.clock);
        availability.lock_calendar(current.provider_id).await?;
        let appointment = Self::lock_appointment(&txn, id).await?;
        if !appointment.status.is_reschedulable() {
            return Err(AppError::NotReschedulable(appointment.status));
        }

        let service = self
            .provider_service(&txn, appointment.service_id, appointment.provider_id)
            .await?;

        if !CalendarService::new(&txn, self.clock)
            .is_within_working_hours(appointment.provider_id, &start)
            .await?
        {
            return Err(AppError::OutOfHours);
        }

        if !availability
            .is_slot_free(
                appointment.provider_id,
                &start,
                service.slot_length(),
                Some(appointment.id),
            )
            .await?
        {
            txn.rollback().await?;
            return Err(AppError::Conflict);
        }

        let start = start.with_timezone(&Utc);
        let updated = AppointmentRepository::new(&txn)
            .update(UpdateAppointmentParams::interval(
                appointment.id,
                start,
                start + service.duration,
            ))
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Rescheduled appointment {} from {} to {}",
            appointment.id,
            appointment.start_time,
            start
        );

        Appointment::from_entity(updated)
    }

    /// Deletes a pending or confirmed appointment
    ///
    /// # Returns
    /// - `Ok(())`: Appointment deleted
    /// - `Err(AppError::NotFound)`: No appointment with that ID
    /// - `Err(AppError::DeleteForbidden)`: Appointment is completed or canceled
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let appointment = Self::lock_appointment(&txn, id).await?;
        if appointment.status.is_terminal() {
            return Err(AppError::DeleteForbidden(appointment.status));
        }

        AppointmentRepository::new(&txn).delete(id).await?;
        txn.commit().await?;

        tracing::info!("Deleted {} appointment {}", appointment.status, id);

        Ok(())
    }

    /// Gets an appointment by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Appointment, AppError> {
        let appointment = AppointmentRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Appointment {} not found", id)))?;

        Appointment::from_entity(appointment)
    }

    /// Gets a provider's next pending or confirmed appointments, soonest first
    pub async fn upcoming_for_provider(
        &self,
        provider_id: i32,
        limit: u64,
    ) -> Result<Vec<Appointment>, AppError> {
        AppointmentRepository::new(self.db)
            .get_upcoming_by_provider(provider_id, Utc::now(), limit)
            .await?
            .into_iter()
            .map(Appointment::from_entity)
            .collect()
    }

    async fn lock_appointment(txn: &DatabaseTransaction, id: i32) -> Result<Appointment, AppError> {
        let appointment = AppointmentRepository::new(txn)
            .lock_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Appointment {} not found", id)))?;

        Appointment::from_entity(appointment)
    }

    async fn provider_service<C: sea_orm::ConnectionTrait>(
        &self,
        db: &C,
        service_id: i32,
        provider_id: i32,
    ) -> Result<Service, AppError> {
        let service = ServiceRepository::new(db)
            .get_by_id(service_id)
            .await?
            .filter(|service| service.provider_id == provider_id)
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Service {} not found for provider {}",
                    service_id, provider_id
                ))
            })?;

        Service::from_entity(service)
    }
}
