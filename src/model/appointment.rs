//! Appointment domain model, lifecycle status, and operation parameters.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Duration, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, model::recurrence::RecurrenceRequest};

/// Lifecycle status of an appointment.
///
/// Stored as its lowercase name in the `status` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Canceled,
}

impl AppointmentStatus {
    /// Statuses that no longer occupy the provider's time.
    pub const NON_BLOCKING: [AppointmentStatus; 2] =
        [AppointmentStatus::Completed, AppointmentStatus::Canceled];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Canceled => "canceled",
        }
    }

    /// Completed and canceled appointments accept no further status change.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Canceled)
    }

    /// Checks the lifecycle transition table.
    ///
    /// ```text
    /// pending   -> confirmed | canceled
    /// confirmed -> completed | canceled
    /// ```
    ///
    /// # Returns
    /// - `true` - `self -> next` is an allowed transition
    /// - `false` - Any other pair, including `x -> x`
    pub fn can_transition_to(self, next: AppointmentStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Confirmed)
                | (Self::Pending, Self::Canceled)
                | (Self::Confirmed, Self::Completed)
                | (Self::Confirmed, Self::Canceled)
        )
    }

    /// Only pending and confirmed appointments may be moved to another time.
    pub fn is_reschedulable(self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "completed" => Ok(Self::Completed),
            "canceled" => Ok(Self::Canceled),
            other => Err(AppError::Validation(format!(
                "Unknown appointment status '{}'",
                other
            ))),
        }
    }
}

/// A booked time interval for one provider, service, and customer.
///
/// `start_time` and `end_time` are absolute instants; `end_time - start_time` is the
/// service duration at booking time and never includes the buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub is_recurring: bool,
    /// Recurrence record shared by every appointment in the same chain.
    pub recurrence_id: Option<i32>,
    pub service_id: i32,
    pub provider_id: i32,
    pub customer_id: i32,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    /// Converts an entity model to an appointment domain model.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Appointment)` - The converted appointment
    /// - `Err(AppError::Validation)` - Stored status is not a known status name
    pub fn from_entity(entity: entity::appointment::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            start_time: entity.start_time,
            end_time: entity.end_time,
            status: entity.status.parse()?,
            is_recurring: entity.is_recurring,
            recurrence_id: entity.recurrence_id,
            service_id: entity.service_id,
            provider_id: entity.provider_id,
            customer_id: entity.customer_id,
            created_at: entity.created_at,
        })
    }

    /// Length of the booked interval.
    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }
}

/// Parameters for a reservation request.
///
/// `requested_start` may carry any UTC offset; it is normalized to the civil zone before
/// any calendar rule is evaluated.
#[derive(Debug, Clone)]
pub struct ReserveAppointmentParams {
    pub title: String,
    pub description: String,
    pub provider_id: i32,
    pub customer_id: i32,
    pub service_id: i32,
    pub requested_start: DateTime<FixedOffset>,
    /// Turns the booking into the first appointment of a recurring chain.
    pub recurrence: Option<RecurrenceRequest>,
}

/// Parameters for inserting an appointment row.
#[derive(Debug, Clone)]
pub struct CreateAppointmentParams {
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub is_recurring: bool,
    pub recurrence_id: Option<i32>,
    pub service_id: i32,
    pub provider_id: i32,
    pub customer_id: i32,
}

/// Parameters for updating an existing appointment.
///
/// Only status and the booked interval are mutable; `None` leaves a field unchanged.
#[derive(Debug, Clone)]
pub struct UpdateAppointmentParams {
    pub id: i32,
    pub status: Option<AppointmentStatus>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

impl UpdateAppointmentParams {
    pub fn status(id: i32, status: AppointmentStatus) -> Self {
        Self {
            id,
            status: Some(status),
            start_time: None,
            end_time: None,
        }
    }

    pub fn interval(id: i32, start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        Self {
            id,
            status: None,
            start_time: Some(start_time),
            end_time: Some(end_time),
        }
    }
}
