use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        trip::{DispatchTripDto, TripDto, UpdateTripStatusDto},
    },
    server::{
        error::AppError,
        model::trip::{AdvanceTripStatusParams, DispatchTripParams},
        service::trip::TripService,
        state::AppState,
    },
};

pub static TRIP_TAG: &str = "trip";

#[utoipa::path(
    get,
    path = "/api/v1/trips",
    tag = TRIP_TAG,
    responses(
        (status = 200, description = "Successfully retrieved trips", body = Vec<TripDto>),
        (status = 503, description = "Database temporarily unavailable", body = ErrorDto)
    ),
)]
pub async fn list_trips(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let trips = TripService::new(&state.db, state.clock.as_ref())
        .list()
        .await?;

    let dto: Vec<TripDto> = trips.into_iter().map(|trip| trip.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Creates a trip and reserves its vehicle and driver.
#[utoipa::path(
    post,
    path = "/api/v1/trips",
    tag = TRIP_TAG,
    request_body = DispatchTripDto,
    responses(
        (status = 201, description = "Trip dispatched", body = TripDto),
        (status = 400, description = "Invalid trip data", body = ErrorDto),
        (status = 404, description = "Vehicle or driver not found", body = ErrorDto),
        (status = 409, description = "Vehicle or driver not eligible for dispatch", body = ErrorDto),
        (status = 503, description = "Database temporarily unavailable, safe to retry", body = ErrorDto)
    ),
)]
pub async fn dispatch_trip(
    State(state): State<AppState>,
    Json(payload): Json<DispatchTripDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = DispatchTripParams::from_dto(payload)?;

    let trip = TripService::new(&state.db, state.clock.as_ref())
        .dispatch(params)
        .await?;

    Ok((StatusCode::CREATED, Json(trip.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/v1/trips/{trip_id}",
    tag = TRIP_TAG,
    params(
        ("trip_id" = i32, Path, description = "Trip ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved trip", body = TripDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 503, description = "Database temporarily unavailable", body = ErrorDto)
    ),
)]
pub async fn get_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let trip = TripService::new(&state.db, state.clock.as_ref())
        .get_by_id(trip_id)
        .await?;

    Ok((StatusCode::OK, Json(trip.into_dto())))
}

/// Advances a trip through its lifecycle.
///
/// `Completed` and `Cancelled` release the vehicle and driver; `odometer_km` is written to
/// the vehicle on release.
#[utoipa::path(
    patch,
    path = "/api/v1/trips/{trip_id}/status",
    tag = TRIP_TAG,
    params(
        ("trip_id" = i32, Path, description = "Trip ID")
    ),
    request_body = UpdateTripStatusDto,
    responses(
        (status = 200, description = "Trip status updated", body = TripDto),
        (status = 400, description = "Invalid status data", body = ErrorDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 409, description = "Transition not allowed from the current status", body = ErrorDto),
        (status = 503, description = "Database temporarily unavailable, safe to retry", body = ErrorDto)
    ),
)]
pub async fn update_trip_status(
    State(state): State<AppState>,
    Path(trip_id): Path<i32>,
    Json(payload): Json<UpdateTripStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = AdvanceTripStatusParams::from_dto(trip_id, payload)?;

    let trip = TripService::new(&state.db, state.clock.as_ref())
        .advance_status(params)
        .await?;

    Ok((StatusCode::OK, Json(trip.into_dto())))
}
