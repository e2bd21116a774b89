//! Domain models for drone registry operations.
//!
//! Defines the drone domain model, its closed status set with the transition table, and
//! the parameter types used by the drone repository and service.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use std::fmt;
use std::str::FromStr;

use crate::{
    model::drone::{
        CreateDroneDto, DroneDto, DroneStatusDto, PositionDto, ReportedPositionDto,
        UpdateDroneDto,
    },
    server::error::validation::ValidationError,
};

const DEFAULT_BATTERY_LEVEL: i32 = 100;
const DEFAULT_MAX_FLIGHT_TIME: i32 = 30;
const DEFAULT_MAX_SPEED: f64 = 15.0;

/// Operational state of a drone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DroneStatus {
    Idle,
    Flying,
    Landing,
    Charging,
    Maintenance,
    Error,
}

impl DroneStatus {
    pub const ALL: [DroneStatus; 6] = [
        DroneStatus::Idle,
        DroneStatus::Flying,
        DroneStatus::Landing,
        DroneStatus::Charging,
        DroneStatus::Maintenance,
        DroneStatus::Error,
    ];

    /// Lowercase name persisted in the `status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Flying => "flying",
            Self::Landing => "landing",
            Self::Charging => "charging",
            Self::Maintenance => "maintenance",
            Self::Error => "error",
        }
    }

    /// Whether a fleet controller may move a drone from `self` to `next`.
    ///
    /// Staying in the same state is always allowed and `Error` is reachable from
    /// every state. Otherwise a drone only lands after flying, only takes off when
    /// idle, and only charges from `Idle` or `Maintenance`.
    pub fn can_transition_to(self, next: DroneStatus) -> bool {
        use DroneStatus::*;

        if self == next || next == Error {
            return true;
        }

        matches!(
            (self, next),
            (Idle, Flying | Charging | Maintenance)
                | (Flying, Landing)
                | (Landing, Idle)
                | (Charging, Idle | Maintenance)
                | (Maintenance, Idle | Charging)
                | (Error, Idle | Maintenance)
        )
    }
}

impl fmt::Display for DroneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DroneStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidStatus(s.to_string()))
    }
}

/// How status changes are checked.
///
/// `Permissive` accepts any move between valid statuses. `Strict` enforces
/// [`DroneStatus::can_transition_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPolicy {
    #[default]
    Permissive,
    Strict,
}

impl TransitionPolicy {
    /// Checks a status change against this policy.
    ///
    /// # Returns
    /// - `Ok(())` - Change allowed
    /// - `Err(ValidationError::InvalidTransition)` - Strict policy and the table forbids it
    pub fn check(self, from: DroneStatus, to: DroneStatus) -> Result<(), ValidationError> {
        match self {
            Self::Permissive => Ok(()),
            Self::Strict if from.can_transition_to(to) => Ok(()),
            Self::Strict => Err(ValidationError::InvalidTransition { from, to }),
        }
    }
}

impl FromStr for TransitionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "strict" => Ok(Self::Strict),
            _ => Err(s.to_string()),
        }
    }
}

/// Current position of a drone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

impl Position {
    pub fn from_dto(dto: PositionDto) -> Self {
        Self {
            latitude: dto.latitude,
            longitude: dto.longitude,
            altitude: dto.altitude,
        }
    }
}

/// Drone as stored in the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct Drone {
    pub id: i32,
    pub name: String,
    pub model: String,
    pub serial_number: String,
    pub status: DroneStatus,
    pub battery_level: i32,
    pub current_latitude: Option<f64>,
    pub current_longitude: Option<f64>,
    pub current_altitude: Option<f64>,
    /// Minutes
    pub max_flight_time: i32,
    pub max_speed: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Drone {
    /// Converts an entity model to a drone domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Drone)` - The converted drone domain model
    /// - `Err(DbErr::Custom)` - Stored status is outside the closed status set
    pub fn from_entity(entity: entity::drone::Model) -> Result<Self, DbErr> {
        let status = entity.status.parse::<DroneStatus>().map_err(|_| {
            DbErr::Custom(format!(
                "Drone {} has unknown stored status '{}'",
                entity.id, entity.status
            ))
        })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            model: entity.model,
            serial_number: entity.serial_number,
            status,
            battery_level: entity.battery_level,
            current_latitude: entity.current_latitude,
            current_longitude: entity.current_longitude,
            current_altitude: entity.current_altitude,
            max_flight_time: entity.max_flight_time,
            max_speed: entity.max_speed,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Position when latitude, longitude and altitude are all present.
    pub fn position(&self) -> Option<Position> {
        match (
            self.current_latitude,
            self.current_longitude,
            self.current_altitude,
        ) {
            (Some(latitude), Some(longitude), Some(altitude)) => Some(Position {
                latitude,
                longitude,
                altitude,
            }),
            _ => None,
        }
    }
}

/// Drone augmented with derived mission information for status reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct DroneSummary {
    pub drone: Drone,
    pub waypoint_count: u64,
    /// Creation time of the most recent waypoint, if the drone has any.
    pub last_waypoint_update: Option<DateTime<Utc>>,
}

impl DroneSummary {
    pub fn into_dto(self) -> DroneDto {
        let drone = self.drone;
        DroneDto {
            id: drone.id,
            name: drone.name,
            model: drone.model,
            serial_number: drone.serial_number,
            status: drone.status.to_string(),
            battery_level: drone.battery_level,
            current_latitude: drone.current_latitude,
            current_longitude: drone.current_longitude,
            current_altitude: drone.current_altitude,
            max_flight_time: drone.max_flight_time,
            max_speed: drone.max_speed,
            waypoint_count: self.waypoint_count,
            last_waypoint_update: self.last_waypoint_update,
            created_at: drone.created_at,
            updated_at: drone.updated_at,
        }
    }

    /// Builds the compact status report taken at `timestamp`.
    ///
    /// Coordinates are reported one by one, so a partially known position keeps the
    /// fields that are set.
    pub fn into_status_dto(self, timestamp: DateTime<Utc>) -> DroneStatusDto {
        DroneStatusDto {
            drone_id: self.drone.id,
            current_position: ReportedPositionDto {
                latitude: self.drone.current_latitude,
                longitude: self.drone.current_longitude,
                altitude: self.drone.current_altitude,
            },
            name: self.drone.name,
            status: self.drone.status.to_string(),
            battery_level: self.drone.battery_level,
            waypoint_count: self.waypoint_count,
            last_update: self.last_waypoint_update,
            timestamp,
        }
    }
}

/// Validated parameters for registering a drone, defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateDroneParam {
    pub name: String,
    pub model: String,
    pub serial_number: String,
    pub status: DroneStatus,
    pub battery_level: i32,
    pub current_latitude: Option<f64>,
    pub current_longitude: Option<f64>,
    pub current_altitude: Option<f64>,
    pub max_flight_time: i32,
    pub max_speed: f64,
}

impl CreateDroneParam {
    /// Validates a creation payload and fills in defaults.
    ///
    /// Defaults: status `idle`, battery 100, max flight time 30, max speed 15.
    ///
    /// # Returns
    /// - `Ok(CreateDroneParam)` - Payload is complete
    /// - `Err(ValidationError::MissingRequiredField)` - name, model or serial number absent or empty
    /// - `Err(ValidationError::InvalidStatus)` - status outside the fixed set
    pub fn from_dto(dto: CreateDroneDto) -> Result<Self, ValidationError> {
        let name = required(dto.name, "name")?;
        let model = required(dto.model, "model")?;
        let serial_number = required(dto.serial_number, "serial_number")?;
        let status = match dto.status {
            Some(status) => status.parse()?,
            None => DroneStatus::Idle,
        };

        Ok(Self {
            name,
            model,
            serial_number,
            status,
            battery_level: dto.battery_level.unwrap_or(DEFAULT_BATTERY_LEVEL),
            current_latitude: dto.current_latitude,
            current_longitude: dto.current_longitude,
            current_altitude: dto.current_altitude,
            max_flight_time: dto.max_flight_time.unwrap_or(DEFAULT_MAX_FLIGHT_TIME),
            max_speed: dto.max_speed.unwrap_or(DEFAULT_MAX_SPEED),
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ValidationError::MissingRequiredField(field)),
    }
}

/// Partial drone update. Only `Some` fields are written.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateDroneParam {
    pub id: i32,
    pub name: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub status: Option<DroneStatus>,
    pub battery_level: Option<i32>,
    pub current_latitude: Option<f64>,
    pub current_longitude: Option<f64>,
    pub current_altitude: Option<f64>,
    pub max_flight_time: Option<i32>,
    pub max_speed: Option<f64>,
}

impl UpdateDroneParam {
    /// # Returns
    /// - `Err(ValidationError::InvalidStatus)` - status outside the fixed set
    pub fn from_dto(id: i32, dto: UpdateDroneDto) -> Result<Self, ValidationError> {
        let status = dto.status.map(|s| s.parse()).transpose()?;

        Ok(Self {
            id,
            name: dto.name,
            model: dto.model,
            serial_number: dto.serial_number,
            status,
            battery_level: dto.battery_level,
            current_latitude: dto.current_latitude,
            current_longitude: dto.current_longitude,
            current_altitude: dto.current_altitude,
            max_flight_time: dto.max_flight_time,
            max_speed: dto.max_speed,
        })
    }

    /// True when no recognized field is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.model.is_none()
            && self.serial_number.is_none()
            && self.status.is_none()
            && self.battery_level.is_none()
            && self.current_latitude.is_none()
            && self.current_longitude.is_none()
            && self.current_altitude.is_none()
            && self.max_flight_time.is_none()
            && self.max_speed.is_none()
    }
}
