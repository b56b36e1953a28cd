//! Error types for the booking engine.
//!
//! `AppError` is the single error type returned by every engine operation. Infrastructure
//! failures (database, configuration, scheduler) are wrapped transparently, while business
//! rejections get their own variants so callers can match on the exact reason a request was
//! refused without parsing messages.

pub mod config;

use thiserror::Error;

use crate::{error::config::ConfigError, model::appointment::AppointmentStatus};

/// Top-level engine error type.
///
/// Rejection variants (`Validation`, `Conflict`, `OutOfHours`, `InvalidTransition`,
/// `PastTime`, `NotReschedulable`, `DeleteForbidden`) never leave partial state behind:
/// every operation that returns one of them has rolled back whatever it started.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// I/O error while waiting on process signals.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Malformed input or stored data.
    ///
    /// # Fields
    /// - Message describing what was invalid
    #[error("{0}")]
    Validation(String),

    /// Referenced record does not exist.
    ///
    /// # Fields
    /// - Message describing what was not found
    #[error("{0}")]
    NotFound(String),

    /// Requested slot overlaps an active appointment of the same provider.
    #[error("Requested time slot is already booked")]
    Conflict,

    /// Requested start is outside working hours, during a break, or on a day off.
    #[error("Requested time is outside the provider's working hours")]
    OutOfHours,

    /// Status change not allowed by the appointment lifecycle.
    #[error("Cannot change appointment status from {from} to {to}")]
    InvalidTransition {
        from: AppointmentStatus,
        to: AppointmentStatus,
    },

    /// Requested start lies before the current instant.
    #[error("Cannot move an appointment into the past")]
    PastTime,

    /// Appointment is completed or canceled and can no longer be moved.
    #[error("Only pending or confirmed appointments can be rescheduled, this one is {0}")]
    NotReschedulable(AppointmentStatus),

    /// Appointment is completed and must be kept.
    #[error("Cannot delete a {0} appointment")]
    DeleteForbidden(AppointmentStatus),

    /// Recurrence record changed between the locking read and the versioned write.
    #[error("Recurrence {0} was modified concurrently")]
    StaleRecurrence(i32),
}
