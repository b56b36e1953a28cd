use super::*;

/// Tests moving an appointment to a free slot.
///
/// Verifies that start and end move together and the status is kept.
///
/// Expected: Ok with Tuesday 11:00-11:30
#[tokio::test]
async fn moves_to_free_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (provider, customer, service) = setup(db).await?;
    let booking = BookingService::new(db, TimeNormalizer::default());
    let appointment = booking
        .validate_and_reserve(reserve(&provider, &customer, &service, monday(10, 0)))
        .await?;

    let moved = booking
        .reschedule(appointment.id, civil(2030, 1, 8, 11, 0))
        .await?;

    assert_eq!(moved.start_time, civil(2030, 1, 8, 11, 0));
    assert_eq!(moved.end_time, civil(2030, 1, 8, 11, 30));
    assert_eq!(moved.status, AppointmentStatus::Pending);

    Ok(())
}

/// Tests moving an appointment onto a slot it partly occupies itself.
///
/// Expected: Ok with start at 10:15
#[tokio::test]
async fn ignores_own_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (provider, customer, service) = setup(db).await?;
    let booking = BookingService::new(db, TimeNormalizer::default());
    let appointment = booking
        .validate_and_reserve(reserve(&provider, &customer, &service, monday(10, 0)))
        .await?;

    let moved = booking.reschedule(appointment.id, monday(10, 15)).await?;

    assert_eq!(moved.start_time, monday(10, 15));

    Ok(())
}

/// Tests moving an appointment onto another booking.
///
/// Verifies that the request is rejected and the appointment keeps its time.
///
/// Expected: Err(Conflict) with no change
#[tokio::test]
async fn rejects_taken_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (provider, customer, service) = setup(db).await?;
    let booking = BookingService::new(db, TimeNormalizer::default());
    let appointment = booking
        .validate_and_reserve(reserve(&provider, &customer, &service, monday(10, 0)))
        .await?;
    booking
        .validate_and_reserve(reserve(&provider, &customer, &service, monday(11, 0)))
        .await?;

    let result = booking.reschedule(appointment.id, monday(10, 45)).await;
    assert!(matches!(result, Err(AppError::Conflict)));

    let unchanged = booking.get_by_id(appointment.id).await?;
    assert_eq!(unchanged.start_time, monday(10, 0));

    Ok(())
}

/// Tests moving an appointment into the past.
///
/// Expected: Err(PastTime)
#[tokio::test]
async fn rejects_past_start() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (provider, customer, service) = setup(db).await?;
    let booking = BookingService::new(db, TimeNormalizer::default());
    let appointment = booking
        .validate_and_reserve(reserve(&provider, &customer, &service, monday(10, 0)))
        .await?;

    let result = booking
        .reschedule(appointment.id, civil(2001, 1, 8, 10, 0))
        .await;

    assert!(matches!(result, Err(AppError::PastTime)));

    Ok(())
}

/// Tests moving an appointment outside working hours.
///
/// Expected: Err(OutOfHours) for a start at 18:00
#[tokio::test]
async fn rejects_out_of_hours_start() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (provider, customer, service) = setup(db).await?;
    let booking = BookingService::new(db, TimeNormalizer::default());
    let appointment = booking
        .validate_and_reserve(reserve(&provider, &customer, &service, monday(10, 0)))
        .await?;

    let result = booking.reschedule(appointment.id, monday(18, 0)).await;

    assert!(matches!(result, Err(AppError::OutOfHours)));

    Ok(())
}

/// Tests moving finished appointments.
///
/// Expected: Err(NotReschedulable) naming the current status
#[tokio::test]
async fn rejects_terminal_appointments() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_provider, customer, service) = setup(db).await?;
    let booking = BookingService::new(db, TimeNormalizer::default());

    for (status, expected) in [
        ("completed", AppointmentStatus::Completed),
        ("canceled", AppointmentStatus::Canceled),
    ] {
        let appointment = factory::appointment::AppointmentFactory::new(db, &service, customer.id)
            .start(monday(10, 0).with_timezone(&Utc))
            .status(status)
            .build()
            .await?;

        let result = booking.reschedule(appointment.id, monday(11, 0)).await;

        match result {
            Err(AppError::NotReschedulable(current)) => assert_eq!(current, expected),
            other => panic!("expected NotReschedulable, got {:?}", other),
        }
    }

    Ok(())
}

/// Tests moving a missing appointment.
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

    let result = booking.reschedule(999, monday(11, 0)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests two appointments rescheduled onto the same free slot at the same time.
///
/// Verifies on a pool of several connections that only one of them moves.
///
/// Expected: one Ok and one Conflict, the other appointment keeps its time
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_moves_to_one_slot_yield_one_winner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .with_pool_size(4)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (provider, customer, service) = setup(db).await?;
    let booking = BookingService::new(db, TimeNormalizer::default());
    let first = booking
        .validate_and_reserve(reserve(&provider, &customer, &service, monday(9, 0)))
        .await?;
    let second = booking
        .validate_and_reserve(reserve(&provider, &customer, &service, monday(9, 30)))
        .await?;

    let moves: Vec<_> = [first.id, second.id]
        .into_iter()
        .map(|id| {
            let db = db.clone();
            tokio::spawn(async move {
                BookingService::new(&db, TimeNormalizer::default())
                    .reschedule(id, monday(15, 0))
                    .await
            })
        })
        .collect();
    let mut results = Vec::new();
    for attempt in moves {
        results.push(attempt.await.unwrap());
    }

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1, "{:?}", results);
    assert_eq!(
        results
            .iter()
            .filter(|r| matches!(r, Err(AppError::Conflict)))
            .count(),
        1,
        "{:?}",
        results
    );

    let at_three = [
        booking.get_by_id(first.id).await?,
        booking.get_by_id(second.id).await?,
    ]
    .into_iter()
    .filter(|appointment| appointment.start_time == monday(15, 0))
    .count();
    assert_eq!(at_three, 1);

    Ok(())
}
