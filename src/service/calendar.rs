//! Provider working calendars: reading, replacing, and checking candidate starts.

use std::collections::HashSet;

use chrono::{DateTime, Datelike, NaiveTime, TimeZone};
use chrono_tz::Tz;
use sea_orm::{ConnectionTrait, TransactionSession, TransactionTrait};

use crate::{
    data::{user::UserRepository, working_hours::WorkingHoursRepository},
    error::AppError,
    model::working_hours::{DayOfWeek, UpsertWorkingHoursParams, WorkingHours, WorkingHoursEntry},
    service::time::TimeNormalizer,
    util::parse::parse_clock_time,
};

pub struct CalendarService<'a, C: ConnectionTrait> {
    db: &'a C,
    clock: TimeNormalizer,
}

impl<'a, C: ConnectionTrait> CalendarService<'a, C> {
    pub fn new(db: &'a C, clock: TimeNormalizer) -> Self {
        Self { db, clock }
    }

    /// Checks whether a candidate start falls inside the provider's working hours
    ///
    /// The candidate is normalized to the civil zone first; the weekday and clock rules
    /// are then applied to that civil date.
    ///
    /// # Arguments
    /// - `provider_id`: Provider whose calendar is consulted
    /// - `candidate_start`: Proposed start, in any zone
    ///
    /// # Returns
    /// - `Ok(true)`: Start is on a work day, within hours, and not inside the break
    /// - `Ok(false)`: No entry for the day, a day off, outside hours, or inside the break
    /// - `Err(AppError::Validation)`: Stored clock strings are malformed
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn is_within_working_hours<Z: TimeZone>(
        &self,
        provider_id: i32,
        candidate_start: &DateTime<Z>,
    ) -> Result<bool, AppError> {
        let start = self.clock.normalize(candidate_start);
        let day = DayOfWeek::from(start.weekday());

        let Some(hours) = WorkingHoursRepository::new(self.db)
            .get_by_provider_and_day(provider_id, day)
            .await?
        else {
            return Ok(false);
        };

        covers(&self.clock, &WorkingHours::from_entity(hours)?, &start)
    }

    /// Gets a provider's working calendar, Sunday first
    pub async fn get_working_hours(&self, provider_id: i32) -> Result<Vec<WorkingHours>, AppError> {
        WorkingHoursRepository::new(self.db)
            .get_by_provider(provider_id)
            .await?
            .into_iter()
            .map(WorkingHours::from_entity)
            .collect()
    }
}

impl<'a, C: ConnectionTrait + TransactionTrait> CalendarService<'a, C> {
    /// Replaces a provider's whole working calendar
    ///
    /// Every entry is validated before anything is written. Days present in `entries`
    /// are created or updated; days absent from it are deleted. All writes happen in one
    /// transaction.
    ///
    /// # Arguments
    /// - `provider_id`: Provider whose calendar is replaced
    /// - `entries`: New calendar, at most one entry per weekday
    ///
    /// # Returns
    /// - `Ok(Vec<WorkingHours>)`: The stored calendar, Sunday first
    /// - `Err(AppError::NotFound)`: Provider does not exist
    /// - `Err(AppError::Validation)`: Any entry is invalid; nothing is written
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn replace_working_hours(
        &self,
        provider_id: i32,
        entries: Vec<WorkingHoursEntry>,
    ) -> Result<Vec<WorkingHours>, AppError> {
        if !UserRepository::new(self.db).exists(provider_id).await? {
            return Err(AppError::NotFound(format!(
                "Provider {} not found",
                provider_id
            )));
        }

        let params = validate_entries(provider_id, entries)?;
        let days: Vec<DayOfWeek> = params.iter().map(|entry| entry.day_of_week).collect();

        let txn = self.db.begin().await?;
        let repo = WorkingHoursRepository::new(&txn);

        let mut stored = Vec::with_capacity(params.len());
        for entry in params {
            stored.push(repo.upsert(entry).await?);
        }
        let removed = repo.delete_days_except(provider_id, &days).await?;

        txn.commit().await?;

        tracing::info!(
            "Replaced working hours for provider {}: {} days stored, {} removed",
            provider_id,
            stored.len(),
            removed
        );

        let mut calendar = stored
            .into_iter()
            .map(WorkingHours::from_entity)
            .collect::<Result<Vec<_>, _>>()?;
        calendar.sort_by_key(|hours| hours.day_of_week);

        Ok(calendar)
    }
}

/// Applies one day's working hours to a start already in the civil zone.
///
/// Boundaries are inclusive: a start exactly at opening or closing time is accepted, as is
/// a start exactly at either end of the break.
///
/// # Returns
/// - `Ok(true)`: Start is acceptable
/// - `Ok(false)`: Day off, outside hours, or strictly inside the break
/// - `Err(AppError::Validation)`: A clock string in `hours` is malformed
pub fn covers(
    clock: &TimeNormalizer,
    hours: &WorkingHours,
    start: &DateTime<Tz>,
) -> Result<bool, AppError> {
    if !hours.is_work_day {
        return Ok(false);
    }

    let date = start.date_naive();
    let open = clock.at_clock(date, parse_clock_time(&hours.start_time)?)?;
    let close = clock.at_clock(date, parse_clock_time(&hours.end_time)?)?;

    if *start < open || *start > close {
        return Ok(false);
    }

    if let (Some(break_start), Some(break_end)) = (&hours.break_start, &hours.break_end) {
        let break_start = clock.at_clock(date, parse_clock_time(break_start)?)?;
        let break_end = clock.at_clock(date, parse_clock_time(break_end)?)?;

        if *start > break_start && *start < break_end {
            return Ok(false);
        }
    }

    Ok(true)
}

/// Validates a calendar replacement request.
///
/// # Returns
/// - `Ok(Vec<UpsertWorkingHoursParams>)`: Entries ready to store, in request order
/// - `Err(AppError::Validation)`: First problem found, naming the entry index
pub fn validate_entries(
    provider_id: i32,
    entries: Vec<WorkingHoursEntry>,
) -> Result<Vec<UpsertWorkingHoursParams>, AppError> {
    if entries.is_empty() {
        return Err(AppError::Validation(
            "At least one working hours entry is required".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    let mut params = Vec::with_capacity(entries.len());

    for (index, entry) in entries.into_iter().enumerate() {
        let day = DayOfWeek::from_index(entry.day_of_week).map_err(|_| {
            AppError::Validation(format!(
                "Invalid day_of_week at index {}: must be 0-6",
                index
            ))
        })?;
        if !seen.insert(day) {
            return Err(AppError::Validation(format!(
                "Duplicate day_of_week {} at index {}",
                entry.day_of_week, index
            )));
        }

        let start = parse_entry_clock(&entry.start_time, "start_time", index)?;
        let end = parse_entry_clock(&entry.end_time, "end_time", index)?;
        if end <= start {
            return Err(AppError::Validation(format!(
                "end_time must be after start_time at index {}",
                index
            )));
        }

        match (&entry.break_start, &entry.break_end) {
            (Some(break_start), Some(break_end)) => {
                let break_start = parse_entry_clock(break_start, "break_start", index)?;
                let break_end = parse_entry_clock(break_end, "break_end", index)?;
                if break_start <= start || break_end <= break_start || end <= break_end {
                    return Err(AppError::Validation(format!(
                        "Invalid break times at index {}: must be within working hours",
                        index
                    )));
                }
            }
            (None, None) => {}
            _ => {
                return Err(AppError::Validation(format!(
                    "Both break_start and break_end must be provided or omitted at index {}",
                    index
                )));
            }
        }

        params.push(UpsertWorkingHoursParams {
            provider_id,
            day_of_week: day,
            start_time: entry.start_time,
            end_time: entry.end_time,
            break_start: entry.break_start,
            break_end: entry.break_end,
            is_work_day: entry.is_work_day,
        });
    }

    Ok(params)
}

fn parse_entry_clock(value: &str, field: &str, index: usize) -> Result<NaiveTime, AppError> {
    parse_clock_time(value).map_err(|_| {
        AppError::Validation(format!(
            "Invalid {} at index {}: must be HH:MM",
            field, index
        ))
    })
}
