use crate::{
    data::working_hours::WorkingHoursRepository,
    model::working_hours::{DayOfWeek, UpsertWorkingHoursParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod upsert;

fn params(provider_id: i32, day: DayOfWeek, start: &str, end: &str) -> UpsertWorkingHoursParams {
    UpsertWorkingHoursParams {
        provider_id,
        day_of_week: day,
        start_time: start.to_string(),
        end_time: end.to_string(),
        break_start: None,
        break_end: None,
        is_work_day: true,
    }
}
