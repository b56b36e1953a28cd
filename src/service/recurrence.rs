//! Recurring chains: creating the recurrence record and generating follow-up appointments.

use chrono::Utc;
use sea_orm::ConnectionTrait;

use crate::{
    data::{
        appointment::AppointmentRepository, recurrence::RecurrenceRepository,
        service::ServiceRepository,
    },
    error::AppError,
    model::{
        appointment::{Appointment, AppointmentStatus, CreateAppointmentParams},
        recurrence::{Recurrence, RecurrenceRequest},
        service::Service,
    },
    service::{availability::AvailabilityService, time::TimeNormalizer},
};

/// Runs inside the caller's transaction; never opens one itself.
pub struct RecurrenceGenerator<'a, C: ConnectionTrait> {
    db: &'a C,
    clock: TimeNormalizer,
}

impl<'a, C: ConnectionTrait> RecurrenceGenerator<'a, C> {
    pub fn new(db: &'a C, clock: TimeNormalizer) -> Self {
        Self { db, clock }
    }

    /// Turns a freshly inserted appointment into the first link of a recurring chain
    ///
    /// # Arguments
    /// - `appointment`: The appointment just reserved
    /// - `request`: Frequency and optional occurrence limit
    ///
    /// # Returns
    /// - `Ok((Appointment, Recurrence))`: The linked appointment and its recurrence record
    /// - `Err(AppError::Validation)`: `end_after` is out of range
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn start_chain(
        &self,
        appointment: &Appointment,
        request: RecurrenceRequest,
    ) -> Result<(Appointment, Recurrence), AppError> {
        let remaining = request.remaining_occurrences()?;

        let recurrence = RecurrenceRepository::new(self.db)
            .create(
                appointment.id,
                request.frequency,
                appointment.start_time,
                remaining,
            )
            .await?;

        let linked = AppointmentRepository::new(self.db)
            .set_recurrence(appointment.id, recurrence.id)
            .await?;

        Ok((
            Appointment::from_entity(linked)?,
            Recurrence::from_entity(recurrence)?,
        ))
    }

    /// Generates the appointment that follows a completed one in its chain
    ///
    /// Locks the provider's calendar and the recurrence record, decrements a bounded
    /// counter, and writes it back with a version check. A counter that reaches zero ends the chain without creating
    /// anything; a counter already at zero is left untouched. The next appointment keeps
    /// the title, parties, service, and length of the completed one and starts one
    /// frequency step later on the civil calendar.
    ///
    /// # Arguments
    /// - `completed`: The appointment that was just completed
    ///
    /// # Returns
    /// - `Ok(Some(Appointment))`: The new pending appointment
    /// - `Ok(None)`: Chain is exhausted
    /// - `Err(AppError::NotFound)`: Provider, recurrence record, or service is missing
    /// - `Err(AppError::Validation)`: Stored frequency is unknown
    /// - `Err(AppError::Conflict)`: The next slot is already taken
    /// - `Err(AppError::StaleRecurrence)`: Record changed after it was read
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn generate_next(
        &self,
        completed: &Appointment,
    ) -> Result<Option<Appointment>, AppError> {
        let recurrence_id = completed.recurrence_id.ok_or_else(|| {
            AppError::NotFound(format!(
                "Recurrence for appointment {} not found",
                completed.id
            ))
        })?;

        let availability = AvailabilityService::new(self.db, self.clock);
        availability.lock_calendar(completed.provider_id).await?;

        let repo = RecurrenceRepository::new(self.db);
        let recurrence = repo.lock_by_id(recurrence_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Recurrence {} not found", recurrence_id))
        })?;
        let recurrence = Recurrence::from_entity(recurrence)?;

        let remaining = match recurrence.remaining_occurrences {
            Some(count) if count <= 0 => {
                tracing::debug!("Recurrence {} already exhausted", recurrence.id);
                return Ok(None);
            }
            Some(count) => Some(count - 1),
            None => None,
        };

        if remaining == Some(0) {
            if !repo
                .advance(recurrence.id, recurrence.version, remaining, recurrence.next_run)
                .await?
            {
                return Err(AppError::StaleRecurrence(recurrence.id));
            }

            tracing::info!(
                "Recurrence {} exhausted after appointment {}",
                recurrence.id,
                completed.id
            );
            return Ok(None);
        }

        let next_start = recurrence
            .frequency
            .advance(self.clock.normalize(&completed.start_time))?
            .with_timezone(&Utc);

        let service = ServiceRepository::new(self.db)
            .get_by_id(completed.service_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Service {} not found", completed.service_id))
            })?;
        let service = Service::from_entity(service)?;

        let free = availability
            .is_slot_free(
                completed.provider_id,
                &next_start,
                service.slot_length(),
                None,
            )
            .await?;
        if !free {
            return Err(AppError::Conflict);
        }

        if !repo
            .advance(recurrence.id, recurrence.version, remaining, next_start)
            .await?
        {
            return Err(AppError::StaleRecurrence(recurrence.id));
        }

        let next = AppointmentRepository::new(self.db)
            .create(CreateAppointmentParams {
                title: completed.title.clone(),
                description: completed.description.clone(),
                start_time: next_start,
                end_time: next_start + completed.duration(),
                status: AppointmentStatus::Pending,
                is_recurring: true,
                recurrence_id: Some(recurrence.id),
                service_id: completed.service_id,
                provider_id: completed.provider_id,
                customer_id: completed.customer_id,
            })
            .await?;

        tracing::info!(
            "Generated appointment {} at {} from recurrence {}",
            next.id,
            next.start_time,
            recurrence.id
        );

        Ok(Some(Appointment::from_entity(next)?))
    }
}
