//! Domain models for trip dispatch operations.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::TripStatus;

use crate::{
    model::trip::{DispatchTripDto, TripDto, TripStatusDto, UpdateTripStatusDto},
    server::error::AppError,
};

const MAX_LOCATION_LEN: usize = 255;

/// Trip with its allocated resources, route and lifecycle state.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub id: i32,
    /// Vehicle reserved at dispatch, immutable afterwards.
    pub vehicle_id: i32,
    /// Driver reserved at dispatch, immutable afterwards.
    pub driver_id: i32,
    pub origin: String,
    pub destination: String,
    pub cargo_weight: i32,
    pub distance_km: Option<f64>,
    pub revenue: Option<f64>,
    pub status: TripStatus,
    pub start_time: Option<DateTime<Utc>>,
    /// Set only when the trip reaches `Completed` or `Cancelled`.
    pub end_time: Option<DateTime<Utc>>,
}

impl Trip {
    /// Converts an entity model to a trip domain model at the repository boundary.
    pub fn from_entity(entity: entity::trip::Model) -> Self {
        Self {
            id: entity.id,
            vehicle_id: entity.vehicle_id,
            driver_id: entity.driver_id,
            origin: entity.origin,
            destination: entity.destination,
            cargo_weight: entity.cargo_weight,
            distance_km: entity.distance_km,
            revenue: entity.revenue,
            status: entity.status,
            start_time: entity.start_time,
            end_time: entity.end_time,
        }
    }

    pub fn into_dto(self) -> TripDto {
        TripDto {
            id: self.id,
            vehicle_id: self.vehicle_id,
            driver_id: self.driver_id,
            origin: self.origin,
            destination: self.destination,
            cargo_weight: self.cargo_weight,
            distance_km: self.distance_km,
            revenue: self.revenue,
            status: self.status.into(),
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}

impl From<TripStatus> for TripStatusDto {
    fn from(status: TripStatus) -> Self {
        match status {
            TripStatus::Draft => Self::Draft,
            TripStatus::Dispatched => Self::Dispatched,
            TripStatus::InTransit => Self::InTransit,
            TripStatus::OutForDelivery => Self::OutForDelivery,
            TripStatus::Delivered => Self::Delivered,
            TripStatus::Completed => Self::Completed,
            TripStatus::Cancelled => Self::Cancelled,
        }
    }
}

impl From<TripStatusDto> for TripStatus {
    fn from(status: TripStatusDto) -> Self {
        match status {
            TripStatusDto::Draft => Self::Draft,
            TripStatusDto::Dispatched => Self::Dispatched,
            TripStatusDto::InTransit => Self::InTransit,
            TripStatusDto::OutForDelivery => Self::OutForDelivery,
            TripStatusDto::Delivered => Self::Delivered,
            TripStatusDto::Completed => Self::Completed,
            TripStatusDto::Cancelled => Self::Cancelled,
        }
    }
}

/// Parameters for dispatching a new trip.
///
/// Shape-level constraints (non-empty route, positive cargo, non-negative distance and
/// revenue) are enforced by [`DispatchTripParams::from_dto`]. Eligibility against the
/// vehicle and driver rows is checked later, under lock, by the orchestrator.
#[derive(Debug, Clone)]
pub struct DispatchTripParams {
    pub vehicle_id: i32,
    pub driver_id: i32,
    pub origin: String,
    pub destination: String,
    pub cargo_weight: i32,
    pub distance_km: Option<f64>,
    pub revenue: Option<f64>,
}

impl DispatchTripParams {
    /// Validates a dispatch request body and converts it to params.
    ///
    /// # Returns
    /// - `Ok(DispatchTripParams)` - Body is well formed
    /// - `Err(AppError::BadRequest)` - A field is out of range; the message names it
    pub fn from_dto(dto: DispatchTripDto) -> Result<Self, AppError> {
        validate_location("origin", &dto.origin)?;
        validate_location("destination", &dto.destination)?;

        if dto.cargo_weight <= 0 {
            return Err(AppError::BadRequest(
                "cargo_weight must be greater than 0".to_string(),
            ));
        }
        validate_non_negative("distance_km", dto.distance_km)?;
        validate_non_negative("revenue", dto.revenue)?;

        Ok(Self {
            vehicle_id: dto.vehicle_id,
            driver_id: dto.driver_id,
            origin: dto.origin,
            destination: dto.destination,
            cargo_weight: dto.cargo_weight,
            distance_km: dto.distance_km,
            revenue: dto.revenue,
        })
    }
}

/// Parameters for advancing a trip to a new lifecycle status.
#[derive(Debug, Clone)]
pub struct AdvanceTripStatusParams {
    pub trip_id: i32,
    pub target: TripStatus,
    /// Odometer reading written to the vehicle on release. Taken as authoritative, even
    /// when lower than the stored reading.
    pub final_odometer: Option<i32>,
}

impl AdvanceTripStatusParams {
    /// Validates a status update body and converts it to params.
    ///
    /// # Returns
    /// - `Ok(AdvanceTripStatusParams)` - Body is well formed
    /// - `Err(AppError::BadRequest)` - Negative odometer reading
    pub fn from_dto(trip_id: i32, dto: UpdateTripStatusDto) -> Result<Self, AppError> {
        if let Some(odometer) = dto.odometer_km {
            if odometer < 0 {
                return Err(AppError::BadRequest(
                    "odometer_km must not be negative".to_string(),
                ));
            }
        }

        Ok(Self {
            trip_id,
            target: dto.status.into(),
            final_odometer: dto.odometer_km,
        })
    }
}

fn validate_location(field: &str, value: &str) -> Result<(), AppError> {
    let len = value.chars().count();
    if len == 0 || len > MAX_LOCATION_LEN {
        return Err(AppError::BadRequest(format!(
            "{} must be between 1 and {} characters",
            field, MAX_LOCATION_LEN
        )));
    }
    Ok(())
}

fn validate_non_negative(field: &str, value: Option<f64>) -> Result<(), AppError> {
    match value {
        Some(v) if v.is_nan() || v < 0.0 => Err(AppError::BadRequest(format!(
            "{} must not be negative",
            field
        ))),
        _ => Ok(()),
    }
}
