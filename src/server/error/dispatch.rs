use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use entity::sea_orm_active_enums::TripStatus;
use sea_orm::ActiveEnum;
use std::fmt;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Kind of row an orchestrator error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Vehicle,
    Driver,
    Trip,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vehicle => f.write_str("Vehicle"),
            Self::Driver => f.write_str("Driver"),
            Self::Trip => f.write_str("Trip"),
        }
    }
}

/// Errors raised by the dispatch orchestrator.
///
/// Every variant except `Store` is a caller error: the request was rejected and the
/// transaction rolled back, so nothing was written. `Store` wraps failures of the database
/// itself (lost connection, deadlock victim, lock wait aborted); the transaction was not
/// committed and the whole operation may be retried.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The referenced vehicle, driver or trip does not exist.
    ///
    /// Results in 404 Not Found.
    #[error("{resource} {id} not found")]
    NotFound { resource: Resource, id: i32 },

    /// The vehicle or driver is not in the availability state dispatch requires.
    ///
    /// Results in 409 Conflict.
    #[error("{resource} {id} is not available (current: {current}, expected: {expected})")]
    ResourceUnavailable {
        resource: Resource,
        id: i32,
        /// Status string the row was found in
        current: String,
        /// Status string dispatch requires
        expected: String,
    },

    /// Cargo weight is larger than the vehicle's maximum capacity.
    ///
    /// Results in 409 Conflict.
    #[error(
        "Cargo weight {cargo_weight} kg exceeds capacity of vehicle {vehicle_id} ({max_capacity_kg} kg)"
    )]
    CapacityExceeded {
        vehicle_id: i32,
        cargo_weight: i32,
        max_capacity_kg: i32,
    },

    /// The driver's license expired before today.
    ///
    /// Results in 409 Conflict.
    #[error("License of driver {driver_id} expired on {license_expiry} (today: {today})")]
    LicenseExpired {
        driver_id: i32,
        license_expiry: NaiveDate,
        today: NaiveDate,
    },

    /// The requested status is not a legal successor of the trip's current status.
    ///
    /// Results in 409 Conflict.
    #[error(
        "Cannot transition trip {trip_id} from {} to {}",
        .from.to_value(),
        .to.to_value()
    )]
    InvalidTransition {
        trip_id: i32,
        from: TripStatus,
        to: TripStatus,
    },

    /// Database failure underneath the orchestrator.
    ///
    /// Results in 503 Service Unavailable so callers know a retry is safe.
    #[error(transparent)]
    Store(#[from] sea_orm::DbErr),
}

impl DispatchError {
    /// Whether the caller may resubmit the identical request.
    ///
    /// Only store failures qualify; every other variant would fail the same way again
    /// until the referenced rows change.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Store(_))
    }
}

/// Converts orchestrator errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For eligibility and lifecycle violations
/// - 503 Service Unavailable - For `Store`, with details logged server-side only
impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::ResourceUnavailable { .. }
            | Self::CapacityExceeded { .. }
            | Self::LicenseExpired { .. }
            | Self::InvalidTransition { .. } => StatusCode::CONFLICT,
            Self::Store(err) => {
                tracing::error!("Dispatch store failure: {}", err);

                return (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorDto {
                        error: "Database temporarily unavailable, please retry".to_string(),
                    }),
                )
                    .into_response();
            }
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
