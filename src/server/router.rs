use axum::{routing::get, Json, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{drone, mission_file, waypoint},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Drone Fleet API", description = "Drone registry and QGC waypoint missions"),
    tags(
        (name = drone::DRONE_TAG, description = "Drone registry"),
        (name = waypoint::WAYPOINT_TAG, description = "Waypoint missions"),
        (name = mission_file::MISSION_FILE_TAG, description = "Stored waypoint files"),
    )
)]
struct ApiDoc;

/// Builds the API router with every handler and the generated OpenAPI document.
///
/// The document is served at `/api/openapi.json`.
pub fn router() -> Router<AppState> {
    let (router, api) = api_router().split_for_parts();

    router
        .route(
            "/api/openapi.json",
            get(move || {
                let api = api.clone();
                async move { Json(api) }
            }),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(drone::get_drones, drone::create_drone))
        .routes(routes!(
            drone::get_drone,
            drone::update_drone,
            drone::delete_drone
        ))
        .routes(routes!(drone::get_drone_status, drone::update_drone_status))
        .routes(routes!(drone::update_drone_battery))
        .routes(routes!(drone::update_drone_position))
        .routes(routes!(waypoint::get_waypoints, waypoint::clear_waypoints))
        .routes(routes!(waypoint::upload_waypoint_file))
        .routes(routes!(waypoint::load_waypoint_file))
        .routes(routes!(waypoint::get_mission_statistics))
        .routes(routes!(waypoint::get_flight_distance))
        .routes(routes!(mission_file::get_mission_files))
}
