//! Appointment status state machine.

use sea_orm::ConnectionTrait;

use crate::{
    data::appointment::AppointmentRepository,
    error::AppError,
    model::appointment::{Appointment, AppointmentStatus, UpdateAppointmentParams},
    service::{recurrence::RecurrenceGenerator, time::TimeNormalizer},
};

/// Result of a status change.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChange {
    pub appointment: Appointment,
    /// Follow-up appointment created when a recurring appointment was completed.
    pub next_occurrence: Option<Appointment>,
}

/// Checks a transition against the lifecycle table.
///
/// # Returns
/// - `Ok(())`: Transition allowed
/// - `Err(AppError::InvalidTransition)`: Any other pair, including every move out of a
///   terminal status
pub fn ensure_transition(from: AppointmentStatus, to: AppointmentStatus) -> Result<(), AppError> {
    if from.can_transition_to(to) {
        Ok(())
    } else {
        Err(AppError::InvalidTransition { from, to })
    }
}

/// Runs inside the caller's transaction; never opens one itself.
pub struct AppointmentLifecycle<'a, C: ConnectionTrait> {
    db: &'a C,
    clock: TimeNormalizer,
}

impl<'a, C: ConnectionTrait> AppointmentLifecycle<'a, C> {
    pub fn new(db: &'a C, clock: TimeNormalizer) -> Self {
        Self { db, clock }
    }

    /// Moves an appointment to a new status
    ///
    /// Completing a recurring appointment also generates the next one in its chain; if
    /// that fails the caller's transaction must be rolled back so the status change is
    /// not kept either.
    ///
    /// # Arguments
    /// - `appointment`: Current state, read under lock by the caller
    /// - `status`: Requested status
    ///
    /// # Returns
    /// - `Ok(StatusChange)`: Updated appointment plus any generated follow-up
    /// - `Err(AppError::InvalidTransition)`: Transition not allowed
    /// - `Err(AppError)`: Recurrence generation or database error
    pub async fn transition(
        &self,
        appointment: &Appointment,
        status: AppointmentStatus,
    ) -> Result<StatusChange, AppError> {
        ensure_transition(appointment.status, status)?;

        let updated = AppointmentRepository::new(self.db)
            .update(UpdateAppointmentParams::status(appointment.id, status))
            .await?;
        let updated = Appointment::from_entity(updated)?;

        tracing::info!(
            "Appointment {} moved from {} to {}",
            updated.id,
            appointment.status,
            status
        );

        let next_occurrence = if status == AppointmentStatus::Completed && updated.is_recurring {
            RecurrenceGenerator::new(self.db, self.clock)
                .generate_next(&updated)
                .await?
        } else {
            None
        };

        Ok(StatusChange {
            appointment: updated,
            next_occurrence,
        })
    }
}
