use crate::server::{
    data::{driver::DriverRepository, trip::TripRepository, vehicle::VehicleRepository},
    model::trip::DispatchTripParams,
};
use chrono::{TimeZone, Utc};
use entity::sea_orm_active_enums::{DriverStatus, TripStatus, VehicleStatus};
use sea_orm::{DbErr, EntityTrait, TransactionTrait};
use test_utils::{builder::TestBuilder, factory};
