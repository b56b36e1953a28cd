//! Recurrence domain model and frequency arithmetic.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Days, Months, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// How far apart consecutive appointments of a chain are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Computes the start of the next occurrence.
    ///
    /// Arithmetic happens on the civil calendar of `from`'s zone: daily adds one calendar
    /// day, weekly seven, and monthly one calendar month. A day of month missing from the
    /// target month clamps to that month's last day (Jan 31 -> Feb 28).
    ///
    /// # Arguments
    /// - `from` - Start of the current occurrence, already in the civil zone
    ///
    /// # Returns
    /// - `Ok(DateTime)` - Start of the next occurrence in the same zone
    /// - `Err(AppError::Validation)` - The result is out of range or does not exist locally
    pub fn advance<Tz: TimeZone>(self, from: DateTime<Tz>) -> Result<DateTime<Tz>, AppError> {
        let next = match self {
            Self::Daily => from.checked_add_days(Days::new(1)),
            Self::Weekly => from.checked_add_days(Days::new(7)),
            Self::Monthly => from.checked_add_months(Months::new(1)),
        };

        next.ok_or_else(|| {
            AppError::Validation(format!("Cannot compute next {} occurrence", self.as_str()))
        })
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            other => Err(AppError::Validation(format!(
                "Unknown recurrence frequency '{}'",
                other
            ))),
        }
    }
}

/// Recurrence record shared by every appointment of a chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Recurrence {
    pub id: i32,
    /// Appointment that started the chain.
    pub appointment_id: i32,
    pub frequency: Frequency,
    /// Start of the most recently generated occurrence.
    pub next_run: DateTime<Utc>,
    /// Occurrences still to generate; `None` is unbounded.
    pub remaining_occurrences: Option<i32>,
    /// Incremented on every write; guards against lost updates.
    pub version: i32,
}

impl Recurrence {
    /// Converts an entity model to a recurrence domain model.
    ///
    /// # Returns
    /// - `Ok(Recurrence)` - The converted recurrence
    /// - `Err(AppError::Validation)` - Stored frequency is unknown
    pub fn from_entity(entity: entity::recurrence::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            appointment_id: entity.appointment_id,
            frequency: entity.frequency.parse()?,
            next_run: entity.next_run,
            remaining_occurrences: entity.remaining_occurrences,
            version: entity.version,
        })
    }
}

/// Recurrence settings supplied with a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecurrenceRequest {
    pub frequency: Frequency,
    /// Number of further occurrences; `None` repeats until canceled.
    pub end_after: Option<u32>,
}

impl RecurrenceRequest {
    /// Converts `end_after` into the stored counter.
    ///
    /// # Returns
    /// - `Ok(Option<i32>)` - Counter value to persist
    /// - `Err(AppError::Validation)` - `end_after` is zero or too large
    pub fn remaining_occurrences(&self) -> Result<Option<i32>, AppError> {
        match self.end_after {
            None => Ok(None),
            Some(0) => Err(AppError::Validation(
                "Recurrence end_after must be at least 1".to_string(),
            )),
            Some(count) => i32::try_from(count).map(Some).map_err(|_| {
                AppError::Validation(format!("Recurrence end_after {} is too large", count))
            }),
        }
    }
}
