use super::*;

/// Tests that intervals overlapping the candidate are returned.
///
/// Verifies that appointments starting before the candidate end and ending
/// after the candidate start are found, ordered by start time.
///
/// Expected: Ok with both overlapping appointments
#[tokio::test]
async fn finds_overlapping_appointments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (provider, customer, service) = factory::helpers::create_booking_dependencies(db).await?;
    let early = factory::create_appointment(db, &service, customer.id, monday_utc(4, 15)).await?;
    let late = factory::create_appointment(db, &service, customer.id, monday_utc(4, 50)).await?;

    let repo = AppointmentRepository::new(db);
    let result = repo
        .lock_overlapping(
            provider.id,
            monday_utc(4, 30),
            monday_utc(5, 0),
            &AppointmentStatus::NON_BLOCKING,
            None,
        )
        .await?;

    let ids: Vec<i32> = result.iter().map(|appointment| appointment.id).collect();
    assert_eq!(ids, vec![early.id, late.id]);

    Ok(())
}

/// Tests that touching intervals do not overlap.
///
/// Verifies that an appointment ending exactly at the candidate start and
/// one starting exactly at the candidate end are not returned.
///
/// Expected: Ok with empty result
#[tokio::test]
async fn ignores_back_to_back_appointments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (provider, customer, service) = factory::helpers::create_booking_dependencies(db).await?;
    factory::create_appointment(db, &service, customer.id, monday_utc(4, 0)).await?;
    factory::create_appointment(db, &service, customer.id, monday_utc(5, 0)).await?;

    let repo = AppointmentRepository::new(db);
    let result = repo
        .lock_overlapping(
            provider.id,
            monday_utc(4, 30),
            monday_utc(5, 0),
            &AppointmentStatus::NON_BLOCKING,
            None,
        )
        .await?;

    assert!(result.is_empty());

    Ok(())
}

/// Tests status and ID exclusion.
///
/// Verifies that completed and canceled appointments and the explicitly
/// excluded appointment are not returned.
///
/// Expected: Ok with only the confirmed appointment
#[tokio::test]
async fn excludes_statuses_and_self() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (provider, customer, service) = factory::helpers::create_booking_dependencies(db).await?;
    let start = monday_utc(4, 30);
    for status in ["completed", "canceled"] {
        factory::appointment::AppointmentFactory::new(db, &service, customer.id)
            .start(start)
            .status(status)
            .build()
            .await?;
    }
    let moving = factory::create_appointment(db, &service, customer.id, start).await?;
    let confirmed = factory::appointment::AppointmentFactory::new(db, &service, customer.id)
        .start(start)
        .status("confirmed")
        .build()
        .await?;

    let repo = AppointmentRepository::new(db);
    let result = repo
        .lock_overlapping(
            provider.id,
            start,
            start + Duration::minutes(30),
            &AppointmentStatus::NON_BLOCKING,
            Some(moving.id),
        )
        .await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, confirmed.id);

    Ok(())
}

/// Tests provider isolation.
///
/// Verifies that another provider's appointment at the same time does not
/// count as an overlap.
///
/// Expected: Ok with empty result
#[tokio::test]
async fn ignores_other_providers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (provider, customer, _service) = factory::helpers::create_booking_dependencies(db).await?;
    let other = factory::create_user(db).await?;
    let other_service = factory::create_service(db, other.id).await?;
    factory::create_appointment(db, &other_service, customer.id, monday_utc(4, 30)).await?;

    let repo = AppointmentRepository::new(db);
    let result = repo
        .lock_overlapping(
            provider.id,
            monday_utc(4, 30),
            monday_utc(5, 0),
            &AppointmentStatus::NON_BLOCKING,
            None,
        )
        .await?;

    assert!(result.is_empty());

    Ok(())
}
