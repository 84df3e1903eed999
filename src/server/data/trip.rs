use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::TripStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder, QuerySelect,
    Select,
};

use crate::server::model::trip::DispatchTripParams;

pub struct TripRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TripRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a trip in the `Dispatched` state
    ///
    /// Does not touch the referenced vehicle or driver; the orchestrator reserves them
    /// in the same transaction.
    ///
    /// # Arguments
    /// - `params`: Validated dispatch request
    /// - `start_time`: Dispatch instant
    ///
    /// # Returns
    /// - `Ok(Model)`: The created trip
    /// - `Err(DbErr)`: Database error
    pub async fn create_dispatched(
        &self,
        params: &DispatchTripParams,
        start_time: DateTime<Utc>,
    ) -> Result<entity::trip::Model, DbErr> {
        entity::trip::ActiveModel {
            vehicle_id: ActiveValue::Set(params.vehicle_id),
            driver_id: ActiveValue::Set(params.driver_id),
            origin: ActiveValue::Set(params.origin.clone()),
            destination: ActiveValue::Set(params.destination.clone()),
            cargo_weight: ActiveValue::Set(params.cargo_weight),
            distance_km: ActiveValue::Set(params.distance_km),
            revenue: ActiveValue::Set(params.revenue),
            status: ActiveValue::Set(TripStatus::Dispatched),
            start_time: ActiveValue::Set(Some(start_time)),
            end_time: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a trip by ID without locking
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The trip
    /// - `Ok(None)`: Trip not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::trip::Model>, DbErr> {
        entity::prelude::Trip::find_by_id(id).one(self.db).await
    }

    /// Gets a trip by ID and takes an exclusive row lock on it
    ///
    /// Trips are locked before their vehicle and driver.
    pub async fn find_by_id_for_update(
        &self,
        id: i32,
    ) -> Result<Option<entity::trip::Model>, DbErr> {
        select_for_update(id).one(self.db).await
    }

    /// Gets all trips ordered by ID (dispatch order)
    pub async fn get_all(&self) -> Result<Vec<entity::trip::Model>, DbErr> {
        entity::prelude::Trip::find()
            .order_by_asc(entity::trip::Column::Id)
            .all(self.db)
            .await
    }

    /// Writes a new lifecycle status
    ///
    /// # Arguments
    /// - `trip`: The trip row, already locked by the caller
    /// - `status`: New status; legality is the caller's responsibility
    /// - `end_time`: Written only when `Some`, leaving any stored value untouched otherwise
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated trip
    /// - `Err(DbErr)`: Database error
    pub async fn update_status(
        &self,
        trip: entity::trip::Model,
        status: TripStatus,
        end_time: Option<DateTime<Utc>>,
    ) -> Result<entity::trip::Model, DbErr> {
        let mut active_model: entity::trip::ActiveModel = trip.into();
        active_model.status = ActiveValue::Set(status);
        if let Some(end_time) = end_time {
            active_model.end_time = ActiveValue::Set(Some(end_time));
        }
        active_model.update(self.db).await
    }
}

fn select_for_update(id: i32) -> Select<entity::trip::Entity> {
    entity::prelude::Trip::find_by_id(id).lock_exclusive()
}
