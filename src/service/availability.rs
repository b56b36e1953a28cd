//! Overlap detection against a provider's existing appointments.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use sea_orm::{ConnectionTrait, TransactionSession, TransactionTrait};

use crate::{
    data::{
        appointment::AppointmentRepository, service::ServiceRepository, user::UserRepository,
        working_hours::WorkingHoursRepository,
    },
    error::AppError,
    model::{
        appointment::AppointmentStatus,
        service::Service,
        working_hours::{DayOfWeek, WorkingHours},
    },
    service::time::TimeNormalizer,
    util::parse::parse_clock_time,
};

pub struct AvailabilityService<'a, C: ConnectionTrait> {
    db: &'a C,
    clock: TimeNormalizer,
}

impl<'a, C: ConnectionTrait> AvailabilityService<'a, C> {
    pub fn new(db: &'a C, clock: TimeNormalizer) -> Self {
        Self { db, clock }
    }

    /// Locks a provider's calendar for the rest of the current transaction
    ///
    /// A free slot has no rows to lock, so writers that check a slot and then claim it
    /// must call this first. Concurrent writers on the same provider then run one after
    /// the other and each sees what the previous one committed.
    ///
    /// # Returns
    /// - `Ok(())`: Calendar locked
    /// - `Err(AppError::NotFound)`: Provider does not exist
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn lock_calendar(&self, provider_id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db)
            .lock_for_write(provider_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "Provider {} not found",
                provider_id
            )));
        }

        Ok(())
    }

    /// Checks whether `[start, start + slot_length)` is free on the provider's calendar
    ///
    /// Completed and canceled appointments never block. The answer only stays valid
    /// until commit when the transaction holds the provider's `lock_calendar`.
    ///
    /// # Arguments
    /// - `provider_id`: Provider whose calendar is checked
    /// - `start`: Candidate start, in any zone
    /// - `slot_length`: Service duration plus buffer
    /// - `exclude_id`: Appointment to ignore, e.g. the one being rescheduled
    ///
    /// # Returns
    /// - `Ok(true)`: No active appointment overlaps the slot
    /// - `Ok(false)`: At least one active appointment overlaps
    /// - `Err(AppError)`: Database error
    pub async fn is_slot_free<Z: TimeZone>(
        &self,
        provider_id: i32,
        start: &DateTime<Z>,
        slot_length: Duration,
        exclude_id: Option<i32>,
    ) -> Result<bool, AppError> {
        let start = start.with_timezone(&Utc);
        let end = start + slot_length;

        let overlapping = AppointmentRepository::new(self.db)
            .lock_overlapping(
                provider_id,
                start,
                end,
                &AppointmentStatus::NON_BLOCKING,
                exclude_id,
            )
            .await?;

        if let Some(first) = overlapping.first() {
            tracing::debug!(
                "Slot {} - {} for provider {} overlaps appointment {}",
                start,
                end,
                provider_id,
                first.id
            );
        }

        Ok(overlapping.is_empty())
    }

    /// Lists the free start times of a service on one civil date
    ///
    /// Candidates step from opening time in increments of the service's slot length.
    /// A candidate is offered when the whole slot ends by closing time, the start is not
    /// inside the break, and no active appointment overlaps the slot.
    ///
    /// # Arguments
    /// - `provider_id`: Provider offering the service
    /// - `service_id`: Service to book
    /// - `date`: Civil date to list
    ///
    /// # Returns
    /// - `Ok(Vec<DateTime<Tz>>)`: Free starts in the civil zone; empty on days off
    /// - `Err(AppError::NotFound)`: Service does not exist or belongs to another provider
    /// - `Err(AppError)`: Validation or database error
    pub async fn available_slots(
        &self,
        provider_id: i32,
        service_id: i32,
        date: NaiveDate,
    ) -> Result<Vec<DateTime<Tz>>, AppError> {
        let service = ServiceRepository::new(self.db)
            .get_by_id(service_id)
            .await?
            .filter(|service| service.provider_id == provider_id)
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Service {} not found for provider {}",
                    service_id, provider_id
                ))
            })?;
        let service = Service::from_entity(service)?;

        let Some(hours) = WorkingHoursRepository::new(self.db)
            .get_by_provider_and_day(provider_id, DayOfWeek::from(date.weekday()))
            .await?
        else {
            return Ok(Vec::new());
        };
        let hours = WorkingHours::from_entity(hours)?;
        if !hours.is_work_day {
            return Ok(Vec::new());
        }

        let open = self.clock.at_clock(date, parse_clock_time(&hours.start_time)?)?;
        let close = self.clock.at_clock(date, parse_clock_time(&hours.end_time)?)?;
        let break_window = match (&hours.break_start, &hours.break_end) {
            (Some(break_start), Some(break_end)) => Some((
                self.clock.at_clock(date, parse_clock_time(break_start)?)?,
                self.clock.at_clock(date, parse_clock_time(break_end)?)?,
            )),
            _ => None,
        };

        let booked = AppointmentRepository::new(self.db)
            .get_active_by_provider_between(
                provider_id,
                open.with_timezone(&Utc),
                close.with_timezone(&Utc),
            )
            .await?;

        let slot_length = service.slot_length();
        let mut slots = Vec::new();
        let mut current = open;

        while current + slot_length <= close {
            let slot_end = current + slot_length;

            let in_break = break_window
                .map(|(break_start, break_end)| current >= break_start && current < break_end)
                .unwrap_or(false);
            let (from, to) = (current.with_timezone(&Utc), slot_end.with_timezone(&Utc));
            let taken = booked
                .iter()
                .any(|appointment| appointment.start_time < to && appointment.end_time > from);

            if !in_break && !taken {
                slots.push(current);
            }

            current = slot_end;
        }

        Ok(slots)
    }
}

impl<'a, C: ConnectionTrait + TransactionTrait> AvailabilityService<'a, C> {
    /// Checks availability in a short transaction of its own
    ///
    /// Used as the pre-flight check before a reservation. The answer is advisory: the
    /// reservation repeats the check inside its write transaction.
    ///
    /// # Returns
    /// - `Ok(true)`: Slot is free
    /// - `Ok(false)`: Slot overlaps an active appointment
    /// - `Err(AppError)`: Database error
    pub async fn check_availability<Z: TimeZone>(
        &self,
        provider_id: i32,
        start: &DateTime<Z>,
        slot_length: Duration,
    ) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let free = AvailabilityService::new(&txn, self.clock)
            .is_slot_free(provider_id, start, slot_length, None)
            .await?;

        txn.commit().await?;

        Ok(free)
    }
}
