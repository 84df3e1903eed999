use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Trip lifecycle status as it appears on the wire.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
pub enum TripStatusDto {
    #[serde(rename = "Draft")]
    Draft,
    #[serde(rename = "Dispatched")]
    Dispatched,
    #[serde(rename = "In Transit")]
    InTransit,
    #[serde(rename = "Out For Delivery")]
    OutForDelivery,
    #[serde(rename = "Delivered")]
    Delivered,
    #[serde(rename = "Completed")]
    Completed,
    #[serde(rename = "Cancelled")]
    Cancelled,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DispatchTripDto {
    pub vehicle_id: i32,
    pub driver_id: i32,
    pub origin: String,
    pub destination: String,
    /// Cargo weight in kilograms, must not exceed the vehicle's capacity.
    pub cargo_weight: i32,
    #[serde(default)]
    pub distance_km: Option<f64>,
    #[serde(default)]
    pub revenue: Option<f64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateTripStatusDto {
    pub status: TripStatusDto,
    /// Final odometer reading, applied to the vehicle when the trip releases it.
    #[serde(default)]
    pub odometer_km: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TripDto {
    pub id: i32,
    pub vehicle_id: i32,
    pub driver_id: i32,
    pub origin: String,
    pub destination: String,
    pub cargo_weight: i32,
    pub distance_km: Option<f64>,
    pub revenue: Option<f64>,
    pub status: TripStatusDto,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}
