use crate::server::{
    data::mission_file::MissionFileStore,
    error::{
        mission::MissionFormatError, not_found::NotFoundError, validation::ValidationError,
        AppError,
    },
    model::waypoint::ParsedWaypoint,
    service::mission::{store::MissionStore, MissionService},
    util::{lock::DroneLocks, qgc::ParseMode},
};
use tempfile::tempdir;
use test_utils::{builder::TestBuilder, factory, fixture::mission};

mod files;
mod load;
mod statistics;
mod upload;

fn parsed_mission(drone_id: i32, count: i32) -> Vec<ParsedWaypoint> {
    (0..count)
        .map(|sequence_number| ParsedWaypoint {
            drone_id,
            sequence_number,
            command: 16,
            param1: 0.0,
            param2: 0.0,
            param3: 0.0,
            param4: 0.0,
            latitude: 0.0,
            longitude: sequence_number as f64 * 0.1,
            altitude: 40.0,
            auto_continue: true,
            source_file: format!("mission-{}.waypoints", count),
        })
        .collect()
}
