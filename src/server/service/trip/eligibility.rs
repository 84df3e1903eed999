//! Dispatch preconditions on locked vehicle and driver rows.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::{DriverStatus, VehicleStatus};
use sea_orm::ActiveEnum;

use crate::server::error::dispatch::{DispatchError, Resource};

/// Checks that a vehicle can take the cargo.
///
/// # Returns
/// - `Ok(())`: Vehicle is `Available` and `cargo_weight <= max_capacity_kg`
/// - `Err(DispatchError::ResourceUnavailable)`: Vehicle is in any other status
/// - `Err(DispatchError::CapacityExceeded)`: Cargo is heavier than the capacity
pub fn check_vehicle(
    vehicle: &entity::vehicle::Model,
    cargo_weight: i32,
) -> Result<(), DispatchError> {
    if vehicle.status != VehicleStatus::Available {
        return Err(DispatchError::ResourceUnavailable {
            resource: Resource::Vehicle,
            id: vehicle.id,
            current: vehicle.status.to_value(),
            expected: VehicleStatus::Available.to_value(),
        });
    }

    if cargo_weight > vehicle.max_capacity_kg {
        return Err(DispatchError::CapacityExceeded {
            vehicle_id: vehicle.id,
            cargo_weight,
            max_capacity_kg: vehicle.max_capacity_kg,
        });
    }

    Ok(())
}

/// Checks that a driver can be assigned on `today`.
///
/// A license expiring today is still valid.
///
/// # Returns
/// - `Ok(())`: Driver is `On Duty` with a valid license
/// - `Err(DispatchError::ResourceUnavailable)`: Driver is in any other status
/// - `Err(DispatchError::LicenseExpired)`: `license_expiry` is before `today`
pub fn check_driver(driver: &entity::driver::Model, today: NaiveDate) -> Result<(), DispatchError> {
    if driver.status != DriverStatus::OnDuty {
        return Err(DispatchError::ResourceUnavailable {
            resource: Resource::Driver,
            id: driver.id,
            current: driver.status.to_value(),
            expected: DriverStatus::OnDuty.to_value(),
        });
    }

    if driver.license_expiry < today {
        return Err(DispatchError::LicenseExpired {
            driver_id: driver.id,
            license_expiry: driver.license_expiry,
            today,
        });
    }

    Ok(())
}
