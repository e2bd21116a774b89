use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        waypoint::MissionFileDto,
    },
    server::{
        error::AppError, model::waypoint::MissionFile, service::mission::MissionService,
        state::AppState,
    },
};

/// Tag for grouping mission-file store endpoints in OpenAPI documentation
pub static MISSION_FILE_TAG: &str = "mission_file";

/// List waypoint files available for loading.
///
/// # Returns
/// - `200 OK` - Files with a `.waypoints` extension, sorted by name
/// - `500 Internal Server Error` - Store directory could not be read
#[utoipa::path(
    get,
    path = "/api/mission-files",
    tag = MISSION_FILE_TAG,
    responses(
        (status = 200, description = "Successfully listed mission files", body = ApiResponse<Vec<MissionFileDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mission_files(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let files = MissionService::new(
        &state.db,
        &state.drone_locks,
        &state.mission_files,
        state.parse_mode,
    )
    .available_files()
    .await?;
    let dtos = files.into_iter().map(MissionFile::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::list(dtos))))
}
