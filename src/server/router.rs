use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{health, trip},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FleetFlow Dispatch API",
        description = "Trip dispatch and lifecycle management for vehicles and drivers"
    ),
    tags(
        (name = "health", description = "Liveness check"),
        (name = "trip", description = "Trip dispatch and status updates")
    )
)]
pub struct ApiDoc;

/// Builds the API router and serves its OpenAPI document.
///
/// The document is available at `/api-docs/openapi.json` with Swagger UI at `/swagger-ui`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::health_check))
        .routes(routes!(trip::list_trips, trip::dispatch_trip))
        .routes(routes!(trip::get_trip))
        .routes(routes!(trip::update_trip_status))
        .split_for_parts();

    router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
}
