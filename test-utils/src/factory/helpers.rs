//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use entity::sea_orm_active_enums::{DriverStatus, TripStatus, VehicleStatus};
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// Unique plates and license numbers keep the `unique` columns from colliding
/// when a test creates several resources.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a trip in the `Dispatched` state along with the resources it holds.
///
/// The vehicle and driver are created already marked `On Trip`, mirroring the
/// state a real dispatch leaves behind. Use this when a test only needs a trip
/// to advance and does not exercise dispatch itself.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((vehicle, driver, trip))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_dispatched_trip(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::vehicle::Model,
        entity::driver::Model,
        entity::trip::Model,
    ),
    DbErr,
> {
    create_trip_in_status(db, TripStatus::Dispatched).await
}

/// Creates a trip in the given status along with the resources it holds.
///
/// Resources are marked `On Trip` unless the status is terminal, in which case
/// they are created idle (`Available` / `On Duty`).
///
/// # Arguments
/// - `db` - Database connection
/// - `status` - Lifecycle status to seed the trip with
///
/// # Returns
/// - `Ok((vehicle, driver, trip))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_trip_in_status(
    db: &DatabaseConnection,
    status: TripStatus,
) -> Result<
    (
        entity::vehicle::Model,
        entity::driver::Model,
        entity::trip::Model,
    ),
    DbErr,
> {
    let released = matches!(status, TripStatus::Completed | TripStatus::Cancelled);
    let (vehicle_status, driver_status) = if released {
        (VehicleStatus::Available, DriverStatus::OnDuty)
    } else {
        (VehicleStatus::OnTrip, DriverStatus::OnTrip)
    };

    let vehicle = crate::factory::vehicle::VehicleFactory::new(db)
        .status(vehicle_status)
        .build()
        .await?;
    let driver = crate::factory::driver::DriverFactory::new(db)
        .status(driver_status)
        .build()
        .await?;
    let trip = crate::factory::trip::TripFactory::new(db, vehicle.id, driver.id)
        .status(status)
        .build()
        .await?;

    Ok((vehicle, driver, trip))
}
