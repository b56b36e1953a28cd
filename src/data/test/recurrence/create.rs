use super::*;

/// Tests creating a recurrence record.
///
/// Verifies that the frequency is stored by name and the version starts at 0.
///
/// Expected: Ok with record readable by ID
#[tokio::test]
async fn creates_recurrence_at_version_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_provider, customer, service) = factory::helpers::create_booking_dependencies(db).await?;
    let start = Utc.with_ymd_and_hms(2030, 1, 7, 4, 30, 0).unwrap();
    let appointment = factory::create_appointment(db, &service, customer.id, start).await?;

    let repo = RecurrenceRepository::new(db);
    let created = repo
        .create(appointment.id, Frequency::Monthly, start, Some(4))
        .await?;

    assert_eq!(created.frequency, "monthly");
    assert_eq!(created.version, 0);
    assert_eq!(created.remaining_occurrences, Some(4));
    assert_eq!(created.next_run, start);
    assert_eq!(repo.get_by_id(created.id).await?, Some(created));

    Ok(())
}
