use chrono::NaiveTime;

use crate::error::AppError;

/// Parses a wall-clock time of day in `HH:MM` form
///
/// # Arguments
/// - `value` - The clock string to parse, e.g. `"09:30"`
///
/// # Returns
/// - `Ok(NaiveTime)` - Successfully parsed time of day
/// - `Err(AppError::Validation)` - The string is not a valid `HH:MM` time
pub fn parse_clock_time(value: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|_| AppError::Validation(format!("Invalid time '{}': expected HH:MM", value)))
}
