use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DroneDto {
    pub id: i32,
    pub name: String,
    pub model: String,
    pub serial_number: String,
    pub status: String,
    pub battery_level: i32,
    pub current_latitude: Option<f64>,
    pub current_longitude: Option<f64>,
    pub current_altitude: Option<f64>,
    pub max_flight_time: i32,
    pub max_speed: f64,
    pub waypoint_count: u64,
    pub last_waypoint_update: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Drone creation payload.
///
/// `name`, `model` and `serial_number` are required; they are optional here so a
/// missing value surfaces as a validation error rather than a deserialization failure.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct CreateDroneDto {
    pub name: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub status: Option<String>,
    pub battery_level: Option<i32>,
    pub current_latitude: Option<f64>,
    pub current_longitude: Option<f64>,
    pub current_altitude: Option<f64>,
    pub max_flight_time: Option<i32>,
    pub max_speed: Option<f64>,
}

/// Partial drone update; absent fields are left untouched, unknown fields ignored.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateDroneDto {
    pub name: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub status: Option<String>,
    pub battery_level: Option<i32>,
    pub current_latitude: Option<f64>,
    pub current_longitude: Option<f64>,
    pub current_altitude: Option<f64>,
    pub max_flight_time: Option<i32>,
    pub max_speed: Option<f64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateStatusDto {
    pub status: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateBatteryDto {
    pub battery_level: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug, ToSchema)]
pub struct PositionDto {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

/// Last reported coordinates; each is `null` until set.
#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug, ToSchema)]
pub struct ReportedPositionDto {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub altitude: Option<f64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DroneStatusDto {
    pub drone_id: i32,
    pub name: String,
    pub status: String,
    pub battery_level: i32,
    pub current_position: ReportedPositionDto,
    pub waypoint_count: u64,
    pub last_update: Option<DateTime<Utc>>,
    pub timestamp: DateTime<Utc>,
}
