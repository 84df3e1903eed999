//! Vehicle factory for creating test vehicle entities.

use entity::sea_orm_active_enums::VehicleStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test vehicles with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::vehicle::VehicleFactory;
///
/// let vehicle = VehicleFactory::new(&db)
///     .max_capacity_kg(500)
///     .build()
///     .await?;
/// ```
pub struct VehicleFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    model: String,
    license_plate: String,
    max_capacity_kg: i32,
    odometer_km: i32,
    acquisition_cost: f64,
    status: VehicleStatus,
}

impl<'a> VehicleFactory<'a> {
    /// Creates a new VehicleFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Truck {id}"`
    /// - license_plate: `"TEST-{id}"`
    /// - max_capacity_kg: `10000`
    /// - odometer_km: `0`
    /// - status: `Available`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Truck {}", id),
            model: "Volvo FH16".to_string(),
            license_plate: format!("TEST-{}", id),
            max_capacity_kg: 10_000,
            odometer_km: 0,
            acquisition_cost: 120_000.0,
            status: VehicleStatus::Available,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn max_capacity_kg(mut self, max_capacity_kg: i32) -> Self {
        self.max_capacity_kg = max_capacity_kg;
        self
    }

    pub fn odometer_km(mut self, odometer_km: i32) -> Self {
        self.odometer_km = odometer_km;
        self
    }

    pub fn status(mut self, status: VehicleStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the vehicle entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::vehicle::Model)` - Created vehicle entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::vehicle::Model, DbErr> {
        entity::vehicle::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            model: ActiveValue::Set(self.model),
            license_plate: ActiveValue::Set(self.license_plate),
            max_capacity_kg: ActiveValue::Set(self.max_capacity_kg),
            odometer_km: ActiveValue::Set(self.odometer_km),
            acquisition_cost: ActiveValue::Set(self.acquisition_cost),
            status: ActiveValue::Set(self.status),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an `Available` vehicle with default values.
///
/// Shorthand for `VehicleFactory::new(db).build().await`.
pub async fn create_vehicle(db: &DatabaseConnection) -> Result<entity::vehicle::Model, DbErr> {
    VehicleFactory::new(db).build().await
}
