use super::*;

/// Tests deleting pending and confirmed appointments.
///
/// Expected: Ok and the appointments are gone
#[tokio::test]
async fn deletes_active_appointments() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_provider, customer, service) = setup(db).await?;
    let booking = BookingService::new(db, TimeNormalizer::default());

    for status in ["pending", "confirmed"] {
        let appointment = factory::appointment::AppointmentFactory::new(db, &service, customer.id)
            .status(status)
            .build()
            .await?;

        booking.delete(appointment.id).await?;

        assert!(matches!(
            booking.get_by_id(appointment.id).await,
            Err(AppError::NotFound(_))
        ));
    }

    Ok(())
}

/// Tests deleting completed and canceled appointments.
///
/// Verifies that both terminal statuses are refused and the rows are kept.
///
/// Expected: Err(DeleteForbidden) carrying the status, appointments still present
#[tokio::test]
async fn keeps_terminal_appointments() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_provider, customer, service) = setup(db).await?;
    let booking = BookingService::new(db, TimeNormalizer::default());

    for status in [AppointmentStatus::Completed, AppointmentStatus::Canceled] {
        let appointment = factory::appointment::AppointmentFactory::new(db, &service, customer.id)
            .status(status.as_str())
            .build()
            .await?;

        let result = booking.delete(appointment.id).await;

        assert!(
            matches!(result, Err(AppError::DeleteForbidden(refused)) if refused == status),
            "{} appointment was not protected",
            status
        );
        assert!(booking.get_by_id(appointment.id).await.is_ok());
    }

    Ok(())
}

/// Tests deleting a missing appointment.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_appointment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let booking = BookingService::new(db, TimeNormalizer::default());

    let result = booking.delete(999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
