use crate::server::{data::waypoint::WaypointRepository, model::waypoint::ParsedWaypoint};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_by_drone;
mod get_by_drone;
mod last_created_at;

fn parsed(drone_id: i32, sequence_number: i32, longitude: f64) -> ParsedWaypoint {
    ParsedWaypoint {
        drone_id,
        sequence_number,
        command: 16,
        param1: 0.0,
        param2: 0.0,
        param3: 0.0,
        param4: 0.0,
        latitude: 0.0,
        longitude,
        altitude: 50.0,
        auto_continue: true,
        source_file: "survey.waypoints".to_string(),
    }
}
