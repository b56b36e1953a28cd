use super::*;

/// Tests inserting a new calendar day.
///
/// Expected: Ok with a new row for the day
#[tokio::test]
async fn inserts_new_day() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_calendar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let provider = factory::create_user(db).await?;

    let repo = WorkingHoursRepository::new(db);
    let stored = repo
        .upsert(params(provider.id, DayOfWeek::Tuesday, "10:00", "18:00"))
        .await?;

    assert_eq!(stored.day_of_week, 2);
    assert_eq!(stored.start_time, "10:00");
    assert_eq!(stored.end_time, "18:00");
    assert!(stored.is_work_day);

    Ok(())
}

/// Tests updating an existing calendar day.
///
/// Verifies that the existing row is updated in place rather than a
/// second row being created.
///
/// Expected: Ok with the same ID and new hours
#[tokio::test]
async fn updates_existing_day() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_calendar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let provider = factory::create_user(db).await?;
    let existing = factory::working_hours::WorkingHoursFactory::new(db, provider.id, 1)
        .break_window("13:00", "14:00")
        .build()
        .await?;

    let repo = WorkingHoursRepository::new(db);
    let stored = repo
        .upsert(params(provider.id, DayOfWeek::Monday, "08:00", "12:00"))
        .await?;

    assert_eq!(stored.id, existing.id);
    assert_eq!(stored.start_time, "08:00");
    assert_eq!(stored.break_start, None);
    assert_eq!(repo.get_by_provider(provider.id).await?.len(), 1);

    Ok(())
}
