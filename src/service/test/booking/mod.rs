use super::{civil, monday};
use crate::{
    data::{appointment::AppointmentRepository, recurrence::RecurrenceRepository},
    error::AppError,
    model::{
        appointment::{AppointmentStatus, ReserveAppointmentParams},
        recurrence::{Frequency, RecurrenceRequest},
    },
    service::{booking::BookingService, time::TimeNormalizer},
};
use chrono::{DateTime, Duration, FixedOffset, Utc};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod reschedule;
mod upcoming_for_provider;

/// Provider with a Monday-to-Friday 09:00-17:00 calendar (break 13:00-14:00), a customer,
/// and a 30 minute service without buffer.
async fn setup(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::service::Model,
    ),
    AppError,
> {
    let (provider, customer, service) = factory::helpers::create_booking_dependencies(db).await?;
    factory::helpers::create_weekday_calendar(db, provider.id).await?;

    Ok((provider, customer, service))
}

fn reserve(
    provider: &entity::user::Model,
    customer: &entity::user::Model,
    service: &entity::service::Model,
    start: DateTime<FixedOffset>,
) -> ReserveAppointmentParams {
    ReserveAppointmentParams {
        title: "Consultation".to_string(),
        description: String::new(),
        provider_id: provider.id,
        customer_id: customer.id,
        service_id: service.id,
        requested_start: start,
        recurrence: None,
    }
}
