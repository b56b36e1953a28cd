use super::monday;
use crate::{
    error::AppError,
    model::appointment::Appointment,
    service::reminder::{ReminderNotifier, ReminderService, ReminderWindow},
};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::Mutex;
use test_utils::{builder::TestBuilder, factory};


fn hourly_window() -> ReminderWindow {
    ReminderWindow {
        lead: Duration::minutes(60),
        width: Duration::minutes(1),
    }
}

/// Remembers which appointments it was asked to remind.
#[derive(Default)]
struct RecordingNotifier {
    reminded: Mutex<Vec<i32>>,
}

#[async_trait]
impl ReminderNotifier for RecordingNotifier {
    async fn notify(&self, appointment: &Appointment) -> Result<(), AppError> {
        self.reminded.lock().unwrap().push(appointment.id);
        Ok(())
    }
}

struct FailingNotifier;

#[async_trait]
impl ReminderNotifier for FailingNotifier {
    async fn notify(&self, _appointment: &Appointment) -> Result<(), AppError> {
        Err(AppError::Validation("delivery failed".to_string()))
    }
}
