use entity::sea_orm_active_enums::VehicleStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QuerySelect, Select,
};

pub struct VehicleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a vehicle by ID without locking
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The vehicle
    /// - `Ok(None)`: Vehicle not found
    /// - `Err(DbErr)`: Database error
    #[cfg(test)]
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find_by_id(id).one(self.db).await
    }

    /// Gets a vehicle by ID and takes an exclusive row lock on it
    ///
    /// Issues `SELECT ... FOR UPDATE`; the lock is held until the surrounding
    /// transaction commits or rolls back. Must be called on a transaction, on a bare
    /// connection the lock is released as soon as the statement finishes.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The locked vehicle
    /// - `Ok(None)`: Vehicle not found
    /// - `Err(DbErr)`: Database error, including lock wait failures
    pub async fn find_by_id_for_update(
        &self,
        id: i32,
    ) -> Result<Option<entity::vehicle::Model>, DbErr> {
        select_for_update(id).one(self.db).await
    }

    /// Sets the availability status of a vehicle
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated vehicle
    /// - `Err(DbErr)`: Database error
    pub async fn set_status(
        &self,
        vehicle: entity::vehicle::Model,
        status: VehicleStatus,
    ) -> Result<entity::vehicle::Model, DbErr> {
        let mut active_model: entity::vehicle::ActiveModel = vehicle.into();
        active_model.status = ActiveValue::Set(status);
        active_model.update(self.db).await
    }

    /// Returns a vehicle to `Available`, optionally recording its final odometer
    ///
    /// # Arguments
    /// - `vehicle`: The vehicle row, already locked by the caller
    /// - `odometer_km`: Final reading; overwrites the stored value when present
    ///
    /// # Returns
    /// - `Ok(Model)`: The released vehicle
    /// - `Err(DbErr)`: Database error
    pub async fn release(
        &self,
        vehicle: entity::vehicle::Model,
        odometer_km: Option<i32>,
    ) -> Result<entity::vehicle::Model, DbErr> {
        let mut active_model: entity::vehicle::ActiveModel = vehicle.into();
        active_model.status = ActiveValue::Set(VehicleStatus::Available);
        if let Some(odometer_km) = odometer_km {
            active_model.odometer_km = ActiveValue::Set(odometer_km);
        }
        active_model.update(self.db).await
    }
}

fn select_for_update(id: i32) -> Select<entity::vehicle::Entity> {
    entity::prelude::Vehicle::find_by_id(id).lock_exclusive()
}
