use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct WaypointDto {
    pub id: i32,
    pub drone_id: i32,
    pub sequence_number: i32,
    pub command: i32,
    pub param1: f64,
    pub param2: f64,
    pub param3: f64,
    pub param4: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub auto_continue: bool,
    pub source_file: String,
    pub created_at: DateTime<Utc>,
}

/// Waypoint file upload.
///
/// A missing or empty `content` means the transfer itself failed and is reported as
/// an upload error.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UploadWaypointFileDto {
    pub filename: String,
    pub content: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MissionLoadDto {
    pub drone_id: i32,
    pub filename: String,
    pub format_version: String,
    pub waypoint_count: usize,
    /// Meters, rounded to two decimals.
    pub total_distance: f64,
    pub waypoints: Vec<WaypointDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MissionFileStatisticsDto {
    pub source_file: String,
    pub created_at: DateTime<Utc>,
    pub total_waypoints: usize,
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
    pub min_altitude: f64,
    pub max_altitude: f64,
    pub avg_altitude: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MissionStatisticsDto {
    pub drone_id: i32,
    pub total_waypoints: usize,
    pub total_distance: f64,
    pub files: Vec<MissionFileStatisticsDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FlightDistanceDto {
    pub drone_id: i32,
    pub waypoint_count: usize,
    pub total_distance: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MissionFileDto {
    pub filename: String,
    pub size: u64,
    pub modified: DateTime<Utc>,
}
