use crate::{data::recurrence::RecurrenceRepository, model::recurrence::Frequency};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod advance;
mod create;
