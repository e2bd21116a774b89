use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        drone::{
            CreateDroneDto, DroneDto, DroneStatusDto, PositionDto, UpdateBatteryDto,
            UpdateDroneDto, UpdateStatusDto,
        },
    },
    server::{
        error::{not_found::NotFoundError, AppError},
        model::drone::{CreateDroneParam, DroneStatus, DroneSummary, Position, UpdateDroneParam},
        service::drone::DroneService,
        state::AppState,
    },
};

/// Tag for grouping drone registry endpoints in OpenAPI documentation
pub static DRONE_TAG: &str = "drone";

fn service(state: &AppState) -> DroneService<'_> {
    DroneService::new(&state.db, &state.drone_locks, state.transition_policy)
}

/// List all drones.
///
/// Returns every registered drone, newest first, each with its waypoint count and the
/// time of its last mission load.
///
/// # Returns
/// - `200 OK` - All drones
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/drones",
    tag = DRONE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved drones", body = ApiResponse<Vec<DroneDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_drones(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let drones = service(&state).get_all().await?;
    let dtos = drones.into_iter().map(DroneSummary::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::list(dtos))))
}

/// Register a new drone.
///
/// `name`, `model` and `serial_number` are required. Omitted fields default to status
/// `idle`, battery 100, max flight time 30 minutes and max speed 15.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Drone attributes
///
/// # Returns
/// - `201 Created` - Drone registered
/// - `400 Bad Request` - Missing required field or invalid status
/// - `500 Internal Server Error` - Database error, e.g. duplicate serial number
#[utoipa::path(
    post,
    path = "/api/drones",
    tag = DRONE_TAG,
    request_body = CreateDroneDto,
    responses(
        (status = 201, description = "Successfully created drone", body = ApiResponse<DroneDto>),
        (status = 400, description = "Invalid drone data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_drone(
    State(state): State<AppState>,
    Json(payload): Json<CreateDroneDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateDroneParam::from_dto(payload)?;
    let drone = service(&state).create(param).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data(drone.into_dto()).with_message("Drone created")),
    ))
}

/// Get a drone by ID.
///
/// # Returns
/// - `200 OK` - The drone with its mission summary
/// - `404 Not Found` - No drone with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/drones/{id}",
    tag = DRONE_TAG,
    params(
        ("id" = i32, Path, description = "Drone ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved drone", body = ApiResponse<DroneDto>),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_drone(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let drone = service(&state)
        .get_by_id(id)
        .await?
        .ok_or(NotFoundError::Drone(id))?;

    Ok((StatusCode::OK, Json(ApiResponse::data(drone.into_dto()))))
}

/// Update a drone.
///
/// Only fields present in the body are changed; unknown fields are ignored and an
/// empty body returns the drone unchanged.
///
/// # Returns
/// - `200 OK` - The updated drone
/// - `400 Bad Request` - Invalid status or disallowed status change
/// - `404 Not Found` - No drone with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/drones/{id}",
    tag = DRONE_TAG,
    params(
        ("id" = i32, Path, description = "Drone ID")
    ),
    request_body = UpdateDroneDto,
    responses(
        (status = 200, description = "Successfully updated drone", body = ApiResponse<DroneDto>),
        (status = 400, description = "Invalid drone data", body = ErrorDto),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_drone(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDroneDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdateDroneParam::from_dto(id, payload)?;
    let drone = service(&state).update(param).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::data(drone.into_dto()).with_message("Drone updated")),
    ))
}

/// Delete a drone and its mission.
///
/// # Returns
/// - `200 OK` - Drone and waypoints removed
/// - `404 Not Found` - No drone with this ID
/// - `500 Internal Server Error` - Database error, nothing removed
#[utoipa::path(
    delete,
    path = "/api/drones/{id}",
    tag = DRONE_TAG,
    params(
        ("id" = i32, Path, description = "Drone ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted drone", body = MessageDto),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_drone(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    service(&state).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Drone deleted"))))
}

/// Get a drone's status report.
///
/// # Returns
/// - `200 OK` - Status, battery, position and mission summary stamped with the report time
/// - `404 Not Found` - No drone with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/drones/{id}/status",
    tag = DRONE_TAG,
    params(
        ("id" = i32, Path, description = "Drone ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved drone status", body = ApiResponse<DroneStatusDto>),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_drone_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let drone = service(&state)
        .get_by_id(id)
        .await?
        .ok_or(NotFoundError::Drone(id))?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::data(drone.into_status_dto(Utc::now()))),
    ))
}

/// Change a drone's status.
///
/// # Returns
/// - `200 OK` - The drone with its new status
/// - `400 Bad Request` - Unknown status or change rejected by the strict transition policy
/// - `404 Not Found` - No drone with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/drones/{id}/status",
    tag = DRONE_TAG,
    params(
        ("id" = i32, Path, description = "Drone ID")
    ),
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Successfully updated status", body = ApiResponse<DroneDto>),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_drone_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let status = payload.status.parse::<DroneStatus>()?;
    let drone = service(&state).update_status(id, status).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::data(drone.into_dto()).with_message("Status updated")),
    ))
}

/// Set a drone's battery level.
///
/// The value is stored as given without range checks.
///
/// # Returns
/// - `200 OK` - The drone with its new battery level
/// - `404 Not Found` - No drone with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/drones/{id}/battery",
    tag = DRONE_TAG,
    params(
        ("id" = i32, Path, description = "Drone ID")
    ),
    request_body = UpdateBatteryDto,
    responses(
        (status = 200, description = "Successfully updated battery level", body = ApiResponse<DroneDto>),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_drone_battery(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBatteryDto>,
) -> Result<impl IntoResponse, AppError> {
    let drone = service(&state)
        .update_battery(id, payload.battery_level)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::data(drone.into_dto()).with_message("Battery level updated")),
    ))
}

/// Set a drone's current position.
///
/// # Returns
/// - `200 OK` - The drone at its new position
/// - `404 Not Found` - No drone with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/drones/{id}/position",
    tag = DRONE_TAG,
    params(
        ("id" = i32, Path, description = "Drone ID")
    ),
    request_body = PositionDto,
    responses(
        (status = 200, description = "Successfully updated position", body = ApiResponse<DroneDto>),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_drone_position(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<PositionDto>,
) -> Result<impl IntoResponse, AppError> {
    let drone = service(&state)
        .update_position(id, Position::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::data(drone.into_dto()).with_message("Position updated")),
    ))
}
