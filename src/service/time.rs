//! Conversion of absolute instants into the engine's civil time zone.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;

use crate::error::AppError;

/// Zone used when none is configured.
pub const DEFAULT_CIVIL_TIME_ZONE: Tz = chrono_tz::Asia::Kolkata;

/// Re-expresses instants in the civil zone.
///
/// Every calendar rule (weekday, working hours, breaks) is evaluated on the value this
/// returns, never on the offset a caller happened to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeNormalizer {
    zone: Tz,
}

impl TimeNormalizer {
    pub fn new(zone: Tz) -> Self {
        Self { zone }
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }

    /// Returns the same instant expressed in the civil zone.
    ///
    /// # Arguments
    /// - `instant` - Any timestamp carrying a zone or offset
    ///
    /// # Returns
    /// The identical instant with the civil zone attached
    pub fn normalize<Z: TimeZone>(&self, instant: &DateTime<Z>) -> DateTime<Tz> {
        instant.with_timezone(&self.zone)
    }

    /// Combines a civil date and a wall-clock time into an instant.
    ///
    /// Ambiguous local times (clocks turned back) resolve to the earlier instant.
    ///
    /// # Returns
    /// - `Ok(DateTime<Tz>)` - The instant at that wall-clock time
    /// - `Err(AppError::Validation)` - The wall-clock time is skipped in the civil zone
    pub fn at_clock(&self, date: NaiveDate, clock: NaiveTime) -> Result<DateTime<Tz>, AppError> {
        self.zone
            .from_local_datetime(&date.and_time(clock))
            .earliest()
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "{} {} does not exist in {}",
                    date,
                    clock.format("%H:%M"),
                    self.zone
                ))
            })
    }
}

impl Default for TimeNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_CIVIL_TIME_ZONE)
    }
}
