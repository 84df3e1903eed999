//! Trip factory for creating test trip entities.
//!
//! Trips in production are only ever created by dispatch. The factory inserts
//! rows directly so lifecycle tests can start from any status without replaying
//! the whole lifecycle.

use chrono::Utc;
use entity::sea_orm_active_enums::TripStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test trips with customizable fields.
///
/// Resource status is not touched; pair it with vehicle and driver factories
/// configured to the status the test needs.
pub struct TripFactory<'a> {
    db: &'a DatabaseConnection,
    vehicle_id: i32,
    driver_id: i32,
    origin: String,
    destination: String,
    cargo_weight: i32,
    distance_km: Option<f64>,
    revenue: Option<f64>,
    status: TripStatus,
}

impl<'a> TripFactory<'a> {
    /// Creates a new TripFactory with default values.
    ///
    /// Defaults:
    /// - origin / destination: `"Depot {id}"` / `"Customer {id}"`
    /// - cargo_weight: `1000`
    /// - status: `Dispatched`
    pub fn new(db: &'a DatabaseConnection, vehicle_id: i32, driver_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            vehicle_id,
            driver_id,
            origin: format!("Depot {}", id),
            destination: format!("Customer {}", id),
            cargo_weight: 1_000,
            distance_km: Some(120.5),
            revenue: Some(1_500.0),
            status: TripStatus::Dispatched,
        }
    }

    pub fn cargo_weight(mut self, cargo_weight: i32) -> Self {
        self.cargo_weight = cargo_weight;
        self
    }

    pub fn status(mut self, status: TripStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the trip entity into the database.
    ///
    /// `start_time` is set for every status except `Draft`.
    ///
    /// # Returns
    /// - `Ok(entity::trip::Model)` - Created trip entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::trip::Model, DbErr> {
        let start_time = (self.status != TripStatus::Draft).then(Utc::now);
        let end_time = matches!(self.status, TripStatus::Completed | TripStatus::Cancelled)
            .then(Utc::now);

        entity::trip::ActiveModel {
            id: ActiveValue::NotSet,
            vehicle_id: ActiveValue::Set(self.vehicle_id),
            driver_id: ActiveValue::Set(self.driver_id),
            origin: ActiveValue::Set(self.origin),
            destination: ActiveValue::Set(self.destination),
            cargo_weight: ActiveValue::Set(self.cargo_weight),
            distance_km: ActiveValue::Set(self.distance_km),
            revenue: ActiveValue::Set(self.revenue),
            status: ActiveValue::Set(self.status),
            start_time: ActiveValue::Set(start_time),
            end_time: ActiveValue::Set(end_time),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a `Dispatched` trip for the given vehicle and driver.
pub async fn create_trip(
    db: &DatabaseConnection,
    vehicle_id: i32,
    driver_id: i32,
) -> Result<entity::trip::Model, DbErr> {
    TripFactory::new(db, vehicle_id, driver_id).build().await
}
