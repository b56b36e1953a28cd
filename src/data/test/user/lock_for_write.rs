use super::*;

/// Tests write-locking an existing user inside a transaction.
///
/// Verifies that the lock reports the row and leaves its contents untouched.
///
/// Expected: Ok(true) with the user unchanged
#[tokio::test]
async fn locks_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_calendar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let provider = factory::user::UserFactory::new(db)
        .name("Dr. Rao")
        .build()
        .await?;

    let txn = db.begin().await?;
    let locked = UserRepository::new(&txn).lock_for_write(provider.id).await?;
    txn.commit().await?;

    assert!(locked);
    let stored = UserRepository::new(db).get_by_id(provider.id).await?.unwrap();
    assert_eq!(stored.name, "Dr. Rao");
    assert_eq!(stored.email, provider.email);

    Ok(())
}

/// Tests write-locking a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_calendar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let txn = db.begin().await?;
    let locked = UserRepository::new(&txn).lock_for_write(999).await?;
    txn.rollback().await?;

    assert!(!locked);

    Ok(())
}
