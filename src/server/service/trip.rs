//! Trip dispatch orchestrator.
//!
//! [`TripService`] is the only writer of trip, vehicle and driver status. Each mutating
//! operation runs in a single database transaction and takes exclusive row locks before
//! reading any status field, so concurrent requests on the same vehicle or driver are
//! serialized by the store. Locks are always taken in the order trip, vehicle, driver.

pub mod eligibility;
pub mod lifecycle;

use entity::sea_orm_active_enums::{DriverStatus, VehicleStatus};
use sea_orm::{ActiveEnum, DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::server::{
    clock::Clock,
    data::{driver::DriverRepository, trip::TripRepository, vehicle::VehicleRepository},
    error::dispatch::{DispatchError, Resource},
    model::trip::{AdvanceTripStatusParams, DispatchTripParams, Trip},
};

pub struct TripService<'a> {
    db: &'a DatabaseConnection,
    clock: &'a dyn Clock,
}

impl<'a> TripService<'a> {
    pub fn new(db: &'a DatabaseConnection, clock: &'a dyn Clock) -> Self {
        Self { db, clock }
    }

    /// Creates a trip and reserves its vehicle and driver in one transaction
    ///
    /// Preconditions are checked in order and the first failure is returned: vehicle
    /// exists and is `Available`, cargo fits, driver exists and is `On Duty`, license has
    /// not expired. Nothing is written unless all of them hold.
    ///
    /// # Arguments
    /// - `params`: Validated dispatch request
    ///
    /// # Returns
    /// - `Ok(Trip)`: The `Dispatched` trip; vehicle and driver are now `On Trip`
    /// - `Err(DispatchError::NotFound)`: Vehicle or driver does not exist
    /// - `Err(DispatchError::ResourceUnavailable)`: Vehicle or driver is busy or inactive
    /// - `Err(DispatchError::CapacityExceeded)`: Cargo heavier than the vehicle allows
    /// - `Err(DispatchError::LicenseExpired)`: Driver's license is no longer valid
    /// - `Err(DispatchError::Store)`: Database failure, safe to retry
    pub async fn dispatch(&self, params: DispatchTripParams) -> Result<Trip, DispatchError> {
        let txn = self.db.begin().await?;
        let result = self.dispatch_locked(&txn, &params).await;
        let trip = finish(txn, result).await?;

        tracing::info!(
            "Dispatched trip {} with vehicle {} and driver {}",
            trip.id,
            trip.vehicle_id,
            trip.driver_id
        );

        Ok(Trip::from_entity(trip))
    }

    async fn dispatch_locked(
        &self,
        txn: &DatabaseTransaction,
        params: &DispatchTripParams,
    ) -> Result<entity::trip::Model, DispatchError> {
        let vehicle_repo = VehicleRepository::new(txn);
        let driver_repo = DriverRepository::new(txn);

        let vehicle = vehicle_repo
            .find_by_id_for_update(params.vehicle_id)
            .await?
            .ok_or(DispatchError::NotFound {
                resource: Resource::Vehicle,
                id: params.vehicle_id,
            })?;
        tracing::debug!("Locked vehicle {} for dispatch", vehicle.id);
        eligibility::check_vehicle(&vehicle, params.cargo_weight)?;

        let driver = driver_repo
            .find_by_id_for_update(params.driver_id)
            .await?
            .ok_or(DispatchError::NotFound {
                resource: Resource::Driver,
                id: params.driver_id,
            })?;
        tracing::debug!("Locked driver {} for dispatch", driver.id);
        eligibility::check_driver(&driver, self.clock.today())?;

        let trip = TripRepository::new(txn)
            .create_dispatched(params, self.clock.now())
            .await?;
        vehicle_repo.set_status(vehicle, VehicleStatus::OnTrip).await?;
        driver_repo.set_status(driver, DriverStatus::OnTrip).await?;

        Ok(trip)
    }

    /// Moves a trip to a new lifecycle status
    ///
    /// `Completed` and `Cancelled` also stamp `end_time` and release the vehicle
    /// (`Available`, odometer updated when given) and the driver (`On Duty`). A vehicle or
    /// driver row that no longer exists is skipped and the transition still commits.
    ///
    /// # Arguments
    /// - `params`: Trip ID, requested status and optional final odometer
    ///
    /// # Returns
    /// - `Ok(Trip)`: The updated trip
    /// - `Err(DispatchError::NotFound)`: Trip does not exist
    /// - `Err(DispatchError::InvalidTransition)`: Target is not a successor of the current status
    /// - `Err(DispatchError::Store)`: Database failure, safe to retry
    pub async fn advance_status(
        &self,
        params: AdvanceTripStatusParams,
    ) -> Result<Trip, DispatchError> {
        let txn = self.db.begin().await?;
        let result = self.advance_status_locked(&txn, &params).await;
        let trip = finish(txn, result).await?;

        tracing::info!(
            "Trip {} advanced to {}",
            trip.id,
            trip.status.to_value()
        );

        Ok(Trip::from_entity(trip))
    }

    async fn advance_status_locked(
        &self,
        txn: &DatabaseTransaction,
        params: &AdvanceTripStatusParams,
    ) -> Result<entity::trip::Model, DispatchError> {
        let trip_repo = TripRepository::new(txn);

        let trip = trip_repo
            .find_by_id_for_update(params.trip_id)
            .await?
            .ok_or(DispatchError::NotFound {
                resource: Resource::Trip,
                id: params.trip_id,
            })?;
        tracing::debug!("Locked trip {} for status update", trip.id);
        lifecycle::ensure_transition(trip.id, trip.status, params.target)?;

        if !lifecycle::releases_resources(params.target) {
            return Ok(trip_repo.update_status(trip, params.target, None).await?);
        }

        let (vehicle_id, driver_id) = (trip.vehicle_id, trip.driver_id);
        let trip = trip_repo
            .update_status(trip, params.target, Some(self.clock.now()))
            .await?;

        let vehicle_repo = VehicleRepository::new(txn);
        match vehicle_repo.find_by_id_for_update(vehicle_id).await? {
            Some(vehicle) => {
                vehicle_repo.release(vehicle, params.final_odometer).await?;
                tracing::info!("Released vehicle {} from trip {}", vehicle_id, trip.id);
            }
            None => tracing::warn!(
                "Vehicle {} of trip {} no longer exists, skipping release",
                vehicle_id,
                trip.id
            ),
        }

        let driver_repo = DriverRepository::new(txn);
        match driver_repo.find_by_id_for_update(driver_id).await? {
            Some(driver) => {
                driver_repo.set_status(driver, DriverStatus::OnDuty).await?;
                tracing::info!("Released driver {} from trip {}", driver_id, trip.id);
            }
            None => tracing::warn!(
                "Driver {} of trip {} no longer exists, skipping release",
                driver_id,
                trip.id
            ),
        }

        Ok(trip)
    }

    /// Gets all trips in dispatch order
    ///
    /// # Returns
    /// - `Ok(Vec<Trip>)`: Every committed trip, oldest first
    /// - `Err(DispatchError::Store)`: Database error
    pub async fn list(&self) -> Result<Vec<Trip>, DispatchError> {
        let trips = TripRepository::new(self.db).get_all().await?;

        Ok(trips.into_iter().map(Trip::from_entity).collect())
    }

    /// Gets a single trip by ID
    ///
    /// # Returns
    /// - `Ok(Trip)`: The trip
    /// - `Err(DispatchError::NotFound)`: Trip does not exist
    /// - `Err(DispatchError::Store)`: Database error
    pub async fn get_by_id(&self, trip_id: i32) -> Result<Trip, DispatchError> {
        TripRepository::new(self.db)
            .get_by_id(trip_id)
            .await?
            .map(Trip::from_entity)
            .ok_or(DispatchError::NotFound {
                resource: Resource::Trip,
                id: trip_id,
            })
    }
}

/// Commits on success, rolls back on failure.
///
/// A failed rollback is logged and the original error returned; the store discards the
/// uncommitted transaction once the connection is dropped.
async fn finish<T>(
    txn: DatabaseTransaction,
    result: Result<T, DispatchError>,
) -> Result<T, DispatchError> {
    match result {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::warn!("Failed to roll back transaction: {}", rollback_err);
            }
            tracing::debug!("Rolled back: {}", err);
            Err(err)
        }
    }
}
