use super::*;

/// Tests listing trips created by dispatch.
///
/// Expected: Ok with trips in dispatch order
#[tokio::test]
async fn lists_dispatched_trips_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let clock = clock();
    let service = TripService::new(db, &clock);

    let mut dispatched = Vec::new();
    for _ in 0..3 {
        let vehicle = factory::create_vehicle(db).await?;
        let driver = factory::create_driver(db).await?;
        let trip = service
            .dispatch(dispatch_params(vehicle.id, driver.id, 1_000))
            .await
            .unwrap();
        dispatched.push(trip);
    }

    let trips = service.list().await.unwrap();

    assert_eq!(trips, dispatched);

    Ok(())
}

/// Tests that failed dispatches leave no trace in the listing.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn lists_nothing_after_rejected_dispatch() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let clock = clock();
    let service = TripService::new(db, &clock);

    let vehicle = factory::vehicle::VehicleFactory::new(db)
        .max_capacity_kg(500)
        .build()
        .await?;
    let driver = factory::create_driver(db).await?;
    let _ = service
        .dispatch(dispatch_params(vehicle.id, driver.id, 501))
        .await;

    let trips = service.list().await.unwrap();

    assert!(trips.is_empty());

    Ok(())
}

/// Tests getting a single trip by ID.
///
/// Expected: Ok(Trip) reflecting the committed status
#[tokio::test]
async fn gets_trip_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let clock = clock();

    let (_, _, trip) = factory::helpers::create_trip_in_status(db, TripStatus::OutForDelivery).await?;

    let service = TripService::new(db, &clock);
    let found = service.get_by_id(trip.id).await.unwrap();

    assert_eq!(found.id, trip.id);
    assert_eq!(found.status, TripStatus::OutForDelivery);

    Ok(())
}

/// Tests getting a trip that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_to_get_missing_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let clock = clock();

    let service = TripService::new(db, &clock);
    let result = service.get_by_id(1).await;

    assert!(matches!(
        result,
        Err(DispatchError::NotFound {
            resource: Resource::Trip,
            id: 1,
        })
    ));

    Ok(())
}
