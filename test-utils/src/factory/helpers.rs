//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates everything a reservation needs.
///
/// Creates, in order:
/// 1. User (as provider)
/// 2. User (as customer)
/// 3. Service owned by the provider (30 minutes, no buffer)
///
/// No working calendar is created; add `working_hours` entries for the days under test.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((provider, customer, service))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::service::Model,
    ),
    DbErr,
> {
    let provider = crate::factory::user::UserFactory::new(db)
        .name("Provider")
        .build()
        .await?;
    let customer = crate::factory::user::UserFactory::new(db)
        .name("Customer")
        .build()
        .await?;
    let service = crate::factory::service::create_service(db, provider.id).await?;

    Ok((provider, customer, service))
}

/// Creates a full Monday-to-Friday calendar for a provider.
///
/// Every weekday runs 09:00-17:00 with a 13:00-14:00 break. Saturday and Sunday have no
/// record at all.
///
/// # Arguments
/// - `db` - Database connection
/// - `provider_id` - Provider the calendar belongs to
///
/// # Returns
/// - `Ok(Vec<Model>)` - The five created working-hours rows, Monday first
/// - `Err(DbErr)` - Database error during creation
pub async fn create_weekday_calendar(
    db: &DatabaseConnection,
    provider_id: i32,
) -> Result<Vec<entity::working_hours::Model>, DbErr> {
    let mut days = Vec::with_capacity(5);
    for day in 1..=5 {
        let hours = crate::factory::working_hours::WorkingHoursFactory::new(db, provider_id, day)
            .hours("09:00", "17:00")
            .break_window("13:00", "14:00")
            .build()
            .await?;
        days.push(hours);
    }

    Ok(days)
}
