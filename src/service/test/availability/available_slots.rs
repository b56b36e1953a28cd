use super::*;

/// Tests listing a working Monday.
///
/// Verifies that 30 minute slots run from 09:00 to 16:30, skipping the two
/// break starts and the booked 10:00 slot.
///
/// Expected: Ok with 13 slots
#[tokio::test]
async fn lists_free_slots_for_work_day() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (provider, customer, service) = factory::helpers::create_booking_dependencies(db).await?;
    factory::helpers::create_weekday_calendar(db, provider.id).await?;
    factory::create_appointment(db, &service, customer.id, monday(10, 0).with_timezone(&Utc))
        .await?;
    let availability = AvailabilityService::new(db, TimeNormalizer::default());

    let slots = availability
        .available_slots(
            provider.id,
            service.id,
            NaiveDate::from_ymd_opt(2030, 1, 7).unwrap(),
        )
        .await?;

    assert_eq!(slots.len(), 13);
    assert_eq!(slots.first().copied().unwrap(), monday(9, 0));
    assert_eq!(slots.last().copied().unwrap(), monday(16, 30));
    assert!(!slots.iter().any(|slot| *slot == monday(10, 0)));
    assert!(!slots.iter().any(|slot| *slot == monday(13, 0) || *slot == monday(13, 30)));
    assert!(slots.iter().any(|slot| *slot == monday(14, 0)));

    Ok(())
}

/// Tests listing days without work.
///
/// Verifies that a day without a calendar entry and a day marked as not
/// worked both yield no slots.
///
/// Expected: Ok with empty lists
#[tokio::test]
async fn returns_nothing_on_days_off() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (provider, _customer, service) = factory::helpers::create_booking_dependencies(db).await?;
    factory::working_hours::WorkingHoursFactory::new(db, provider.id, 1)
        .work_day(false)
        .build()
        .await?;
    let availability = AvailabilityService::new(db, TimeNormalizer::default());

    let saturday = availability
        .available_slots(provider.id, service.id, civil(2030, 1, 12, 0, 0).date_naive())
        .await?;
    let monday_off = availability
        .available_slots(provider.id, service.id, civil(2030, 1, 7, 0, 0).date_naive())
        .await?;

    assert!(saturday.is_empty());
    assert!(monday_off.is_empty());

    Ok(())
}

/// Tests listing slots with a buffered service.
///
/// Verifies that the step is duration plus buffer and the last slot still
/// ends by closing time.
///
/// Expected: Ok with 09:00, 10:00, 11:00 for a 45+15 minute service in 09:00-12:00
#[tokio::test]
async fn steps_by_duration_plus_buffer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (provider, _customer, _service) = factory::helpers::create_booking_dependencies(db).await?;
    factory::working_hours::WorkingHoursFactory::new(db, provider.id, 1)
        .hours("09:00", "12:00")
        .build()
        .await?;
    let buffered = factory::service::ServiceFactory::new(db, provider.id)
        .duration_minutes(45)
        .buffer_minutes(15)
        .build()
        .await?;
    let availability = AvailabilityService::new(db, TimeNormalizer::default());

    let slots = availability
        .available_slots(
            provider.id,
            buffered.id,
            NaiveDate::from_ymd_opt(2030, 1, 7).unwrap(),
        )
        .await?;

    assert_eq!(slots, vec![monday(9, 0), monday(10, 0), monday(11, 0)]);

    Ok(())
}

/// Tests listing slots for another provider's service.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_foreign_service() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (provider, _customer, _service) = factory::helpers::create_booking_dependencies(db).await?;
    let other = factory::create_user(db).await?;
    let foreign = factory::create_service(db, other.id).await?;
    let availability = AvailabilityService::new(db, TimeNormalizer::default());

    let result = availability
        .available_slots(
            provider.id,
            foreign.id,
            NaiveDate::from_ymd_opt(2030, 1, 7).unwrap(),
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
