//! Domain models for waypoints and missions.
//!
//! A mission is not stored on its own: it is the ordered set of a drone's waypoints.
//! Parsed waypoints carry everything except the database ID and creation time, which
//! the mission store assigns when the set is written.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::{
    model::waypoint::{
        FlightDistanceDto, MissionFileDto, MissionFileStatisticsDto, MissionLoadDto,
        MissionStatisticsDto, WaypointDto,
    },
    server::util::distance,
};

/// One waypoint record produced by the mission parser.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedWaypoint {
    pub drone_id: i32,
    /// Dense, zero-based index over accepted lines.
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
}

/// Result of parsing a waypoint file.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedMission {
    /// Token following `QGC WPL` in the header, e.g. `110`.
    pub format_version: String,
    pub waypoints: Vec<ParsedWaypoint>,
    /// Data lines dropped by the lenient parser.
    pub skipped_lines: usize,
}

/// Stored waypoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
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

impl Waypoint {
    /// Converts an entity model to a waypoint domain model at the repository boundary.
    pub fn from_entity(entity: entity::waypoint::Model) -> Self {
        Self {
            id: entity.id,
            drone_id: entity.drone_id,
            sequence_number: entity.sequence_number,
            command: entity.command,
            param1: entity.param1,
            param2: entity.param2,
            param3: entity.param3,
            param4: entity.param4,
            latitude: entity.latitude,
            longitude: entity.longitude,
            altitude: entity.altitude,
            auto_continue: entity.auto_continue,
            source_file: entity.source_file,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> WaypointDto {
        WaypointDto {
            id: self.id,
            drone_id: self.drone_id,
            sequence_number: self.sequence_number,
            command: self.command,
            param1: self.param1,
            param2: self.param2,
            param3: self.param3,
            param4: self.param4,
            latitude: self.latitude,
            longitude: self.longitude,
            altitude: self.altitude,
            auto_continue: self.auto_continue,
            source_file: self.source_file,
            created_at: self.created_at,
        }
    }
}

/// Horizontal path length over waypoints already in sequence order.
pub fn mission_distance(waypoints: &[Waypoint]) -> f64 {
    distance::path_length(waypoints.iter().map(|w| (w.latitude, w.longitude)))
}

/// Outcome of a successful upload or load.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionLoad {
    pub drone_id: i32,
    pub filename: String,
    pub format_version: String,
    /// Meters, rounded to two decimals.
    pub total_distance: f64,
    pub waypoints: Vec<Waypoint>,
}

impl MissionLoad {
    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    pub fn into_dto(self) -> MissionLoadDto {
        MissionLoadDto {
            drone_id: self.drone_id,
            waypoint_count: self.waypoint_count(),
            filename: self.filename,
            format_version: self.format_version,
            total_distance: self.total_distance,
            waypoints: self.waypoints.into_iter().map(Waypoint::into_dto).collect(),
        }
    }
}

/// Bounding box and altitude summary for the waypoints of one source file and load time.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionFileStatistics {
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

impl MissionFileStatistics {
    pub fn into_dto(self) -> MissionFileStatisticsDto {
        MissionFileStatisticsDto {
            source_file: self.source_file,
            created_at: self.created_at,
            total_waypoints: self.total_waypoints,
            min_latitude: self.min_latitude,
            max_latitude: self.max_latitude,
            min_longitude: self.min_longitude,
            max_longitude: self.max_longitude,
            min_altitude: self.min_altitude,
            max_altitude: self.max_altitude,
            avg_altitude: self.avg_altitude,
        }
    }
}

/// Statistics over a drone's current mission.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionStatistics {
    pub drone_id: i32,
    pub total_waypoints: usize,
    pub total_distance: f64,
    /// Newest group first.
    pub files: Vec<MissionFileStatistics>,
}

impl MissionStatistics {
    /// Summarizes waypoints already in sequence order.
    ///
    /// Waypoints are grouped by `(source_file, created_at)`; groups are returned newest
    /// first.
    pub fn from_waypoints(drone_id: i32, waypoints: &[Waypoint]) -> Self {
        let mut groups: BTreeMap<(DateTime<Utc>, &str), Vec<&Waypoint>> = BTreeMap::new();
        for waypoint in waypoints {
            groups
                .entry((waypoint.created_at, waypoint.source_file.as_str()))
                .or_default()
                .push(waypoint);
        }

        let files = groups
            .into_iter()
            .rev()
            .map(|((created_at, source_file), group)| {
                let count = group.len();
                let fold = |f: fn(f64, f64) -> f64, value: fn(&Waypoint) -> f64, init: f64| {
                    group.iter().map(|w| value(w)).fold(init, f)
                };

                MissionFileStatistics {
                    source_file: source_file.to_string(),
                    created_at,
                    total_waypoints: count,
                    min_latitude: fold(f64::min, |w| w.latitude, f64::INFINITY),
                    max_latitude: fold(f64::max, |w| w.latitude, f64::NEG_INFINITY),
                    min_longitude: fold(f64::min, |w| w.longitude, f64::INFINITY),
                    max_longitude: fold(f64::max, |w| w.longitude, f64::NEG_INFINITY),
                    min_altitude: fold(f64::min, |w| w.altitude, f64::INFINITY),
                    max_altitude: fold(f64::max, |w| w.altitude, f64::NEG_INFINITY),
                    avg_altitude: group.iter().map(|w| w.altitude).sum::<f64>() / count as f64,
                }
            })
            .collect();

        Self {
            drone_id,
            total_waypoints: waypoints.len(),
            total_distance: mission_distance(waypoints),
            files,
        }
    }

    pub fn into_dto(self) -> MissionStatisticsDto {
        MissionStatisticsDto {
            drone_id: self.drone_id,
            total_waypoints: self.total_waypoints,
            total_distance: self.total_distance,
            files: self
                .files
                .into_iter()
                .map(MissionFileStatistics::into_dto)
                .collect(),
        }
    }
}

/// Path length of a drone's current mission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightDistance {
    pub drone_id: i32,
    pub waypoint_count: usize,
    pub total_distance: f64,
}

impl FlightDistance {
    pub fn into_dto(self) -> FlightDistanceDto {
        FlightDistanceDto {
            drone_id: self.drone_id,
            waypoint_count: self.waypoint_count,
            total_distance: self.total_distance,
        }
    }
}

/// Waypoint file available in the mission-file store.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionFile {
    pub filename: String,
    /// Bytes
    pub size: u64,
    pub modified: DateTime<Utc>,
}

impl MissionFile {
    pub fn into_dto(self) -> MissionFileDto {
        MissionFileDto {
            filename: self.filename,
            size: self.size,
            modified: self.modified,
        }
    }
}
