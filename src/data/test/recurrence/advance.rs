use super::*;

/// Tests a versioned advance at the current version.
///
/// Verifies that the counter and next run are written and the version is
/// incremented.
///
/// Expected: Ok(true) with updated record
#[tokio::test]
async fn advances_at_current_version() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_provider, customer, service) = factory::helpers::create_booking_dependencies(db).await?;
    let start = Utc.with_ymd_and_hms(2030, 1, 7, 4, 30, 0).unwrap();
    let appointment = factory::create_appointment(db, &service, customer.id, start).await?;
    let (_, recurrence) = factory::recurrence::RecurrenceFactory::new(db, appointment)
        .remaining(Some(3))
        .build()
        .await?;

    let next_run = start + Duration::days(7);
    let repo = RecurrenceRepository::new(db);
    let advanced = repo
        .advance(recurrence.id, recurrence.version, Some(2), next_run)
        .await?;

    assert!(advanced);
    let stored = repo.get_by_id(recurrence.id).await?.unwrap();
    assert_eq!(stored.remaining_occurrences, Some(2));
    assert_eq!(stored.next_run, next_run);
    assert_eq!(stored.version, recurrence.version + 1);

    Ok(())
}

/// Tests a versioned advance with an outdated version.
///
/// Verifies that a writer holding an old version changes nothing.
///
/// Expected: Ok(false) with record unchanged
#[tokio::test]
async fn rejects_stale_version() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_provider, customer, service) = factory::helpers::create_booking_dependencies(db).await?;
    let start = Utc.with_ymd_and_hms(2030, 1, 7, 4, 30, 0).unwrap();
    let appointment = factory::create_appointment(db, &service, customer.id, start).await?;
    let (_, recurrence) = factory::recurrence::RecurrenceFactory::new(db, appointment)
        .remaining(Some(3))
        .build()
        .await?;

    let repo = RecurrenceRepository::new(db);
    assert!(
        repo.advance(recurrence.id, 0, Some(2), start + Duration::days(7))
            .await?
    );

    let stale = repo
        .advance(recurrence.id, 0, Some(1), start + Duration::days(14))
        .await?;

    assert!(!stale);
    let stored = repo.get_by_id(recurrence.id).await?.unwrap();
    assert_eq!(stored.remaining_occurrences, Some(2));
    assert_eq!(stored.version, 1);

    Ok(())
}
