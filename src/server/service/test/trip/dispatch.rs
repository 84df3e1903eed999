use super::*;

/// Tests dispatching with an available vehicle and on-duty driver.
///
/// Verifies the trip is created `Dispatched` with the clock's start time and that
/// both resources are reserved.
///
/// Expected: Ok(Trip) with vehicle and driver `On Trip`
#[tokio::test]
async fn dispatches_trip_and_reserves_resources() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let clock = clock();

    let vehicle = factory::create_vehicle(db).await?;
    let driver = factory::create_driver(db).await?;

    let service = TripService::new(db, &clock);
    let trip = service
        .dispatch(dispatch_params(vehicle.id, driver.id, 2_500))
        .await
        .unwrap();

    assert_eq!(trip.vehicle_id, vehicle.id);
    assert_eq!(trip.driver_id, driver.id);
    assert_eq!(trip.origin, "Hamburg");
    assert_eq!(trip.destination, "Berlin");
    assert_eq!(trip.cargo_weight, 2_500);
    assert_eq!(trip.status, TripStatus::Dispatched);
    assert_eq!(trip.start_time, Some(clock.now()));
    assert_eq!(trip.end_time, None);

    assert_eq!(vehicle_status(db, vehicle.id).await?, VehicleStatus::OnTrip);
    assert_eq!(driver_status(db, driver.id).await?, DriverStatus::OnTrip);

    Ok(())
}

/// Tests the capacity boundary.
///
/// Verifies cargo equal to capacity is accepted while one kilogram more is rejected
/// without touching either resource.
///
/// Expected: Ok for 10000 kg, Err(CapacityExceeded) for 10001 kg
#[tokio::test]
async fn accepts_cargo_at_capacity_and_rejects_one_over() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let clock = clock();
    let service = TripService::new(db, &clock);

    let over = factory::vehicle::VehicleFactory::new(db)
        .max_capacity_kg(10_000)
        .build()
        .await?;
    let driver = factory::create_driver(db).await?;

    let result = service
        .dispatch(dispatch_params(over.id, driver.id, 10_001))
        .await;

    assert!(matches!(
        result,
        Err(DispatchError::CapacityExceeded {
            cargo_weight: 10_001,
            max_capacity_kg: 10_000,
            ..
        })
    ));
    assert_eq!(vehicle_status(db, over.id).await?, VehicleStatus::Available);
    assert_eq!(driver_status(db, driver.id).await?, DriverStatus::OnDuty);
    assert_eq!(trip_count(db).await?, 0);

    let exact = service
        .dispatch(dispatch_params(over.id, driver.id, 10_000))
        .await;

    assert!(exact.is_ok());

    Ok(())
}

/// Tests the full allocation scenario on a single vehicle.
///
/// V1 (capacity 10000) and D1 dispatch successfully, a second dispatch on V1 with
/// another driver is refused, and completing the first trip frees V1 and D1.
///
/// Expected: second dispatch Err(ResourceUnavailable), resources idle after completion
#[tokio::test]
async fn refuses_busy_vehicle_until_trip_completes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let clock = clock();
    let service = TripService::new(db, &clock);

    let v1 = factory::vehicle::VehicleFactory::new(db)
        .max_capacity_kg(10_000)
        .build()
        .await?;
    let d1 = factory::create_driver(db).await?;
    let d2 = factory::create_driver(db).await?;

    let trip = service
        .dispatch(dispatch_params(v1.id, d1.id, 10_000))
        .await
        .unwrap();
    assert_eq!(trip.status, TripStatus::Dispatched);

    let second = service.dispatch(dispatch_params(v1.id, d2.id, 500)).await;
    match second {
        Err(DispatchError::ResourceUnavailable {
            resource,
            id,
            current,
            expected,
        }) => {
            assert_eq!(resource, Resource::Vehicle);
            assert_eq!(id, v1.id);
            assert_eq!(current, "On Trip");
            assert_eq!(expected, "Available");
        }
        other => panic!("expected ResourceUnavailable, got {:?}", other),
    }
    assert_eq!(driver_status(db, d2.id).await?, DriverStatus::OnDuty);

    let completed = service
        .advance_status(advance_params(trip.id, TripStatus::Completed))
        .await
        .unwrap();

    assert_eq!(completed.end_time, Some(clock.now()));
    assert_eq!(vehicle_status(db, v1.id).await?, VehicleStatus::Available);
    assert_eq!(driver_status(db, d1.id).await?, DriverStatus::OnDuty);

    Ok(())
}

/// Tests dispatching a driver whose license expired yesterday.
///
/// Expected: Err(LicenseExpired) with nothing mutated
#[tokio::test]
async fn rejects_expired_license_without_mutation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let clock = clock();

    let vehicle = factory::create_vehicle(db).await?;
    let driver = factory::driver::DriverFactory::new(db)
        .license_expiry(clock.today() - Duration::days(1))
        .build()
        .await?;

    let service = TripService::new(db, &clock);
    let result = service
        .dispatch(dispatch_params(vehicle.id, driver.id, 1_000))
        .await;

    assert!(matches!(
        result,
        Err(DispatchError::LicenseExpired { driver_id, .. }) if driver_id == driver.id
    ));
    assert_eq!(vehicle_status(db, vehicle.id).await?, VehicleStatus::Available);
    assert_eq!(driver_status(db, driver.id).await?, DriverStatus::OnDuty);
    assert_eq!(trip_count(db).await?, 0);

    Ok(())
}

/// Tests that a license expiring today is still accepted.
///
/// Expected: Ok(Trip)
#[tokio::test]
async fn accepts_license_expiring_today() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let clock = clock();

    let vehicle = factory::create_vehicle(db).await?;
    let driver = factory::driver::DriverFactory::new(db)
        .license_expiry(clock.today())
        .build()
        .await?;

    let service = TripService::new(db, &clock);
    let result = service
        .dispatch(dispatch_params(vehicle.id, driver.id, 1_000))
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that an unavailable driver leaves the already locked vehicle untouched.
///
/// Expected: Err(ResourceUnavailable) and the vehicle still `Available`
#[tokio::test]
async fn rolls_back_vehicle_when_driver_unavailable() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let clock = clock();

    let vehicle = factory::create_vehicle(db).await?;
    let driver = factory::driver::DriverFactory::new(db)
        .status(DriverStatus::Suspended)
        .build()
        .await?;

    let service = TripService::new(db, &clock);
    let result = service
        .dispatch(dispatch_params(vehicle.id, driver.id, 1_000))
        .await;

    assert!(matches!(
        result,
        Err(DispatchError::ResourceUnavailable {
            resource: Resource::Driver,
            ..
        })
    ));
    assert_eq!(vehicle_status(db, vehicle.id).await?, VehicleStatus::Available);
    assert_eq!(driver_status(db, driver.id).await?, DriverStatus::Suspended);
    assert_eq!(trip_count(db).await?, 0);

    Ok(())
}

/// Tests that vehicle checks run before the driver is looked at.
///
/// Both resources are unusable; the vehicle failure must win.
///
/// Expected: Err(ResourceUnavailable) for the vehicle
#[tokio::test]
async fn reports_vehicle_failure_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let clock = clock();

    let vehicle = factory::vehicle::VehicleFactory::new(db)
        .status(VehicleStatus::InShop)
        .build()
        .await?;
    let driver = factory::driver::DriverFactory::new(db)
        .status(DriverStatus::OffDuty)
        .build()
        .await?;

    let service = TripService::new(db, &clock);
    let result = service
        .dispatch(dispatch_params(vehicle.id, driver.id, 1_000))
        .await;

    assert!(matches!(
        result,
        Err(DispatchError::ResourceUnavailable {
            resource: Resource::Vehicle,
            ..
        })
    ));

    Ok(())
}

/// Tests dispatching with a vehicle ID that does not exist.
///
/// Expected: Err(NotFound) naming the vehicle
#[tokio::test]
async fn fails_for_missing_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let clock = clock();

    let driver = factory::create_driver(db).await?;

    let service = TripService::new(db, &clock);
    let result = service.dispatch(dispatch_params(404, driver.id, 1_000)).await;

    assert!(matches!(
        result,
        Err(DispatchError::NotFound {
            resource: Resource::Vehicle,
            id: 404,
        })
    ));
    assert_eq!(driver_status(db, driver.id).await?, DriverStatus::OnDuty);

    Ok(())
}

/// Tests dispatching with a driver ID that does not exist.
///
/// Expected: Err(NotFound) naming the driver, vehicle untouched
#[tokio::test]
async fn fails_for_missing_driver() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let clock = clock();

    let vehicle = factory::create_vehicle(db).await?;

    let service = TripService::new(db, &clock);
    let result = service
        .dispatch(dispatch_params(vehicle.id, 404, 1_000))
        .await;

    assert!(matches!(
        result,
        Err(DispatchError::NotFound {
            resource: Resource::Driver,
            id: 404,
        })
    ));
    assert_eq!(vehicle_status(db, vehicle.id).await?, VehicleStatus::Available);

    Ok(())
}
