use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        waypoint::{
            FlightDistanceDto, MissionLoadDto, MissionStatisticsDto, UploadWaypointFileDto,
            WaypointDto,
        },
    },
    server::{
        error::AppError, model::waypoint::Waypoint, service::mission::MissionService,
        state::AppState,
    },
};

/// Tag for grouping waypoint mission endpoints in OpenAPI documentation
pub static WAYPOINT_TAG: &str = "waypoint";

fn service(state: &AppState) -> MissionService<'_> {
    MissionService::new(
        &state.db,
        &state.drone_locks,
        &state.mission_files,
        state.parse_mode,
    )
}

/// Get a drone's mission.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Drone ID
///
/// # Returns
/// - `200 OK` - Waypoints in sequence order, possibly empty
/// - `404 Not Found` - No drone with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/drones/{id}/waypoints",
    tag = WAYPOINT_TAG,
    params(
        ("id" = i32, Path, description = "Drone ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved waypoints", body = ApiResponse<Vec<WaypointDto>>),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_waypoints(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let waypoints = service(&state).list(id).await?;
    let dtos = waypoints.into_iter().map(Waypoint::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::list(dtos))))
}

/// Clear a drone's mission.
///
/// # Returns
/// - `200 OK` - Mission removed, message states how many waypoints were deleted
/// - `404 Not Found` - No drone with this ID
/// - `500 Internal Server Error` - Database error, mission unchanged
#[utoipa::path(
    delete,
    path = "/api/drones/{id}/waypoints",
    tag = WAYPOINT_TAG,
    params(
        ("id" = i32, Path, description = "Drone ID")
    ),
    responses(
        (status = 200, description = "Successfully cleared waypoints", body = MessageDto),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn clear_waypoints(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let removed = service(&state).clear(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!("Removed {} waypoints", removed))),
    ))
}

/// Upload a waypoint file as a drone's mission.
///
/// The file is saved in the mission-file store under `filename`, replacing any file of
/// the same name, then parsed. On success it replaces the drone's whole mission.
///
/// # Arguments
/// - `state` - Application state
/// - `id` - Drone ID
/// - `payload` - File name and text content
///
/// # Returns
/// - `200 OK` - Stored mission with format version and total distance
/// - `400 Bad Request` - Missing content, invalid file name or rejected file format
/// - `404 Not Found` - No drone with this ID
/// - `500 Internal Server Error` - Storage error, previous mission unchanged
#[utoipa::path(
    post,
    path = "/api/drones/{id}/waypoints/upload",
    tag = WAYPOINT_TAG,
    params(
        ("id" = i32, Path, description = "Drone ID")
    ),
    request_body = UploadWaypointFileDto,
    responses(
        (status = 200, description = "Successfully loaded mission", body = ApiResponse<MissionLoadDto>),
        (status = 400, description = "Upload or file format rejected", body = ErrorDto),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_waypoint_file(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UploadWaypointFileDto>,
) -> Result<impl IntoResponse, AppError> {
    let content = payload.content.as_deref().map(str::as_bytes);
    let mission = service(&state)
        .upload(id, &payload.filename, content)
        .await?;

    let message = format!("Loaded {} waypoints", mission.waypoint_count());

    Ok((
        StatusCode::OK,
        Json(ApiResponse::data(mission.into_dto()).with_message(message)),
    ))
}

/// Load a stored waypoint file as a drone's mission.
///
/// # Returns
/// - `200 OK` - Stored mission with format version and total distance
/// - `400 Bad Request` - Invalid file name or rejected file format
/// - `404 Not Found` - No drone with this ID or no such file
/// - `500 Internal Server Error` - Storage error, previous mission unchanged
#[utoipa::path(
    post,
    path = "/api/drones/{id}/waypoints/load/{filename}",
    tag = WAYPOINT_TAG,
    params(
        ("id" = i32, Path, description = "Drone ID"),
        ("filename" = String, Path, description = "Name of a file in the mission-file store")
    ),
    responses(
        (status = 200, description = "Successfully loaded mission", body = ApiResponse<MissionLoadDto>),
        (status = 400, description = "File format rejected", body = ErrorDto),
        (status = 404, description = "Drone or file not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn load_waypoint_file(
    State(state): State<AppState>,
    Path((id, filename)): Path<(i32, String)>,
) -> Result<impl IntoResponse, AppError> {
    let mission = service(&state).load(id, &filename).await?;

    let message = format!("Loaded {} waypoints", mission.waypoint_count());

    Ok((
        StatusCode::OK,
        Json(ApiResponse::data(mission.into_dto()).with_message(message)),
    ))
}

/// Get statistics for a drone's mission.
///
/// Waypoints are grouped by the file and load that produced them, newest first.
///
/// # Returns
/// - `200 OK` - Per-file bounds and total path distance
/// - `404 Not Found` - No drone with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/drones/{id}/waypoints/statistics",
    tag = WAYPOINT_TAG,
    params(
        ("id" = i32, Path, description = "Drone ID")
    ),
    responses(
        (status = 200, description = "Successfully computed statistics", body = ApiResponse<MissionStatisticsDto>),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mission_statistics(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let statistics = service(&state).statistics(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(statistics.into_dto()))))
}

/// Get the horizontal path length of a drone's mission in meters.
#[utoipa::path(
    get,
    path = "/api/drones/{id}/waypoints/distance",
    tag = WAYPOINT_TAG,
    params(
        ("id" = i32, Path, description = "Drone ID")
    ),
    responses(
        (status = 200, description = "Successfully computed distance", body = ApiResponse<FlightDistanceDto>),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_flight_distance(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let distance = service(&state).flight_distance(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(distance.into_dto()))))
}
