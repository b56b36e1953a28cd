use super::*;

/// Tests listing a provider's upcoming appointments.
///
/// Verifies that only the provider's future pending and confirmed appointments are
/// returned, soonest first, and that the limit is applied.
///
/// Expected: Ok with the 09:00 then 10:00 appointments; only 09:00 with limit 1
#[tokio::test]
async fn lists_future_active_appointments() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (provider, customer, service) = setup(db).await?;
    let (_other_provider, _, other_service) =
        factory::helpers::create_booking_dependencies(db).await?;

    let later =
        factory::create_appointment(db, &service, customer.id, monday(10, 0).with_timezone(&Utc))
            .await?;
    let sooner = factory::appointment::AppointmentFactory::new(db, &service, customer.id)
        .start(monday(9, 0).with_timezone(&Utc))
        .status("confirmed")
        .build()
        .await?;
    for status in ["completed", "canceled"] {
        factory::appointment::AppointmentFactory::new(db, &service, customer.id)
            .start(monday(11, 0).with_timezone(&Utc))
            .status(status)
            .build()
            .await?;
    }
    factory::create_appointment(db, &service, customer.id, Utc::now() - Duration::days(1))
        .await?;
    factory::create_appointment(
        db,
        &other_service,
        customer.id,
        monday(12, 0).with_timezone(&Utc),
    )
    .await?;
    let booking = BookingService::new(db, TimeNormalizer::default());

    let upcoming = booking.upcoming_for_provider(provider.id, 10).await?;
    let ids: Vec<i32> = upcoming.iter().map(|appointment| appointment.id).collect();
    assert_eq!(ids, vec![sooner.id, later.id]);
    assert_eq!(upcoming[0].status, AppointmentStatus::Confirmed);

    let first_only = booking.upcoming_for_provider(provider.id, 1).await?;
    assert_eq!(first_only.len(), 1);
    assert_eq!(first_only[0].id, sooner.id);

    Ok(())
}
