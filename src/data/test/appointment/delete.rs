use super::*;

/// Tests deleting an appointment.
///
/// Expected: Ok and the appointment can no longer be found
#[tokio::test]
async fn deletes_appointment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_provider, customer, service) = factory::helpers::create_booking_dependencies(db).await?;
    let appointment =
        factory::create_appointment(db, &service, customer.id, monday_utc(4, 30)).await?;

    let repo = AppointmentRepository::new(db);
    repo.delete(appointment.id).await?;

    assert!(repo.get_by_id(appointment.id).await?.is_none());

    Ok(())
}
