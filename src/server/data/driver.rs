use entity::sea_orm_active_enums::DriverStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QuerySelect, Select,
};

pub struct DriverRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DriverRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a driver by ID without locking
    #[cfg(test)]
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::driver::Model>, DbErr> {
        entity::prelude::Driver::find_by_id(id).one(self.db).await
    }

    /// Gets a driver by ID and takes an exclusive row lock on it
    ///
    /// Same contract as `VehicleRepository::find_by_id_for_update`. Callers locking
    /// both resources must lock the vehicle first.
    pub async fn find_by_id_for_update(
        &self,
        id: i32,
    ) -> Result<Option<entity::driver::Model>, DbErr> {
        select_for_update(id).one(self.db).await
    }

    /// Sets the availability status of a driver
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated driver
    /// - `Err(DbErr)`: Database error
    pub async fn set_status(
        &self,
        driver: entity::driver::Model,
        status: DriverStatus,
    ) -> Result<entity::driver::Model, DbErr> {
        let mut active_model: entity::driver::ActiveModel = driver.into();
        active_model.status = ActiveValue::Set(status);
        active_model.update(self.db).await
    }
}

fn select_for_update(id: i32) -> Select<entity::driver::Entity> {
    entity::prelude::Driver::find_by_id(id).lock_exclusive()
}
