use super::*;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;

/// Tests two dispatches submitted together for the same vehicle.
///
/// Both requests run concurrently with different drivers. The in-memory store has a
/// single connection, so the second transaction starts only after the first commits
/// and sees the winner's `On Trip`. Row locks are covered by the Postgres test below.
///
/// Expected: exactly one Ok, the other Err(ResourceUnavailable); losing driver untouched
#[tokio::test]
async fn concurrent_dispatches_on_same_vehicle_allow_one_winner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let clock = clock();

    let vehicle = factory::create_vehicle(db).await?;
    let first_driver = factory::create_driver(db).await?;
    let second_driver = factory::create_driver(db).await?;

    let first = TripService::new(db, &clock);
    let second = TripService::new(db, &clock);
    let (a, b) = tokio::join!(
        first.dispatch(dispatch_params(vehicle.id, first_driver.id, 1_000)),
        second.dispatch(dispatch_params(vehicle.id, second_driver.id, 1_000)),
    );

    let (winner, loser_driver, loser) = match (a, b) {
        (Ok(trip), Err(err)) => (trip, second_driver.id, err),
        (Err(err), Ok(trip)) => (trip, first_driver.id, err),
        other => panic!("expected exactly one successful dispatch, got {:?}", other),
    };

    assert!(matches!(
        loser,
        DispatchError::ResourceUnavailable {
            resource: Resource::Vehicle,
            ..
        }
    ));
    assert_eq!(winner.vehicle_id, vehicle.id);
    assert_eq!(vehicle_status(db, vehicle.id).await?, VehicleStatus::OnTrip);
    assert_eq!(driver_status(db, winner.driver_id).await?, DriverStatus::OnTrip);
    assert_eq!(driver_status(db, loser_driver).await?, DriverStatus::OnDuty);
    assert_eq!(trip_count(db).await?, 1);

    Ok(())
}

/// Tests dispatches on disjoint resources running concurrently.
///
/// Expected: both Ok
#[tokio::test]
async fn concurrent_dispatches_on_distinct_resources_both_succeed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let clock = clock();

    let first_vehicle = factory::create_vehicle(db).await?;
    let second_vehicle = factory::create_vehicle(db).await?;
    let first_driver = factory::create_driver(db).await?;
    let second_driver = factory::create_driver(db).await?;

    let service = TripService::new(db, &clock);
    let (a, b) = tokio::join!(
        service.dispatch(dispatch_params(first_vehicle.id, first_driver.id, 1_000)),
        service.dispatch(dispatch_params(second_vehicle.id, second_driver.id, 1_000)),
    );

    assert!(a.is_ok());
    assert!(b.is_ok());
    assert_eq!(trip_count(db).await?, 2);

    Ok(())
}

/// Tests a release racing a new dispatch on the same vehicle and driver.
///
/// Whichever commits first decides the outcome; either way the resources end in a
/// consistent state.
///
/// Expected: resources idle if the dispatch lost, `On Trip` if it won
#[tokio::test]
async fn release_and_dispatch_race_stays_consistent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let clock = clock();

    let (vehicle, driver, trip) = factory::helpers::create_dispatched_trip(db).await?;

    let service = TripService::new(db, &clock);
    let (released, redispatched) = tokio::join!(
        service.advance_status(advance_params(trip.id, TripStatus::Completed)),
        service.dispatch(dispatch_params(vehicle.id, driver.id, 1_000)),
    );

    assert!(released.is_ok());
    match redispatched {
        Ok(_) => {
            assert_eq!(vehicle_status(db, vehicle.id).await?, VehicleStatus::OnTrip);
            assert_eq!(driver_status(db, driver.id).await?, DriverStatus::OnTrip);
        }
        Err(DispatchError::ResourceUnavailable { .. }) => {
            assert_eq!(vehicle_status(db, vehicle.id).await?, VehicleStatus::Available);
            assert_eq!(driver_status(db, driver.id).await?, DriverStatus::OnDuty);
        }
        Err(other) => panic!("unexpected dispatch error: {:?}", other),
    }

    Ok(())
}

/// Tests racing dispatches on a Postgres pool with several connections.
///
/// Both transactions are open at the same time, so only the `FOR UPDATE` lock on the
/// vehicle row stops the second one from reading `Available`. Needs
/// `TEST_DATABASE_URL` pointing at a disposable Postgres database; every table in it
/// is dropped and recreated.
///
/// Expected: every round has exactly one Ok and one Err(ResourceUnavailable)
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
#[ignore = "requires TEST_DATABASE_URL pointing at a disposable Postgres database"]
async fn concurrent_dispatches_on_postgres_pool_allow_one_winner() -> Result<(), DbErr> {
    let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be set");
    let mut opt = ConnectOptions::new(url);
    opt.max_connections(8).sqlx_logging(false);
    let db = Database::connect(opt).await?;
    Migrator::fresh(&db).await?;
    let clock = Arc::new(clock());

    for round in 0..20 {
        let vehicle = factory::create_vehicle(&db).await?;
        let first_driver = factory::create_driver(&db).await?;
        let second_driver = factory::create_driver(&db).await?;
        let vehicle_id = vehicle.id;

        let handles = [first_driver.id, second_driver.id].map(|driver_id| {
            let db = db.clone();
            let clock = clock.clone();
            tokio::spawn(async move {
                TripService::new(&db, clock.as_ref())
                    .dispatch(dispatch_params(vehicle_id, driver_id, 1_000))
                    .await
            })
        });

        let mut winners = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => winners += 1,
                Err(DispatchError::ResourceUnavailable {
                    resource: Resource::Vehicle,
                    ..
                }) => {}
                Err(other) => panic!("round {}: unexpected dispatch error: {:?}", round, other),
            }
        }

        assert_eq!(winners, 1, "round {}", round);
        assert_eq!(vehicle_status(&db, vehicle.id).await?, VehicleStatus::OnTrip);
    }

    Ok(())
}
