//! Working calendar domain models.

use chrono::Weekday;

use crate::error::AppError;

/// Day of the week as stored in `working_hours.day_of_week`.
///
/// Numbered from Sunday (0) to Saturday (6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DayOfWeek {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl DayOfWeek {
    /// Parses the stored day number.
    ///
    /// # Returns
    /// - `Ok(DayOfWeek)` - `value` is within 0..=6
    /// - `Err(AppError::Validation)` - Any other number
    pub fn from_index(value: i32) -> Result<Self, AppError> {
        match value {
            0 => Ok(Self::Sunday),
            1 => Ok(Self::Monday),
            2 => Ok(Self::Tuesday),
            3 => Ok(Self::Wednesday),
            4 => Ok(Self::Thursday),
            5 => Ok(Self::Friday),
            6 => Ok(Self::Saturday),
            other => Err(AppError::Validation(format!(
                "Invalid day_of_week {}: must be 0-6",
                other
            ))),
        }
    }

    pub fn index(self) -> i32 {
        self as i32
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sun => Self::Sunday,
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri => Self::Friday,
            Weekday::Sat => Self::Saturday,
        }
    }
}

/// One weekday of a provider's working calendar.
///
/// Clock values are kept as stored (`HH:MM`) and parsed when a rule is evaluated, so a
/// malformed row surfaces as a validation error at the point of use.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkingHours {
    pub id: i32,
    pub provider_id: i32,
    pub day_of_week: DayOfWeek,
    pub start_time: String,
    pub end_time: String,
    pub break_start: Option<String>,
    pub break_end: Option<String>,
    pub is_work_day: bool,
}

impl WorkingHours {
    /// Converts an entity model to a working hours domain model.
    ///
    /// # Returns
    /// - `Ok(WorkingHours)` - The converted row
    /// - `Err(AppError::Validation)` - Stored day number is out of range
    pub fn from_entity(entity: entity::working_hours::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            provider_id: entity.provider_id,
            day_of_week: DayOfWeek::from_index(entity.day_of_week)?,
            start_time: entity.start_time,
            end_time: entity.end_time,
            break_start: entity.break_start,
            break_end: entity.break_end,
            is_work_day: entity.is_work_day,
        })
    }
}

/// One entry of a calendar replacement request.
///
/// `day_of_week` is the raw number supplied by the caller and is validated before
/// anything is written.
#[derive(Debug, Clone)]
pub struct WorkingHoursEntry {
    pub day_of_week: i32,
    pub start_time: String,
    pub end_time: String,
    pub break_start: Option<String>,
    pub break_end: Option<String>,
    pub is_work_day: bool,
}

/// A validated calendar entry ready to be stored.
#[derive(Debug, Clone)]
pub struct UpsertWorkingHoursParams {
    pub provider_id: i32,
    pub day_of_week: DayOfWeek,
    pub start_time: String,
    pub end_time: String,
    pub break_start: Option<String>,
    pub break_end: Option<String>,
    pub is_work_day: bool,
}
