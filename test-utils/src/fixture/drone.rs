//! Drone fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::drone;

/// Default test drone name.
pub const DEFAULT_NAME: &str = "Test Drone";

/// Default test serial number.
pub const DEFAULT_SERIAL_NUMBER: &str = "SN-TEST-0001";

/// Creates a drone entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Drone"`
/// - model: `"Quad X4"`
/// - serial_number: `"SN-TEST-0001"`
/// - status: `"idle"`
/// - battery_level: `100`
/// - position: all `None`
/// - max_flight_time: `30`
/// - max_speed: `15.0`
/// - created_at / updated_at: 2026-01-01T00:00:00Z
///
/// # Returns
/// - `drone::Model` - In-memory drone entity
pub fn entity() -> drone::Model {
    let timestamp = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();

    drone::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        model: "Quad X4".to_string(),
        serial_number: DEFAULT_SERIAL_NUMBER.to_string(),
        status: "idle".to_string(),
        battery_level: 100,
        current_latitude: None,
        current_longitude: None,
        current_altitude: None,
        max_flight_time: 30,
        max_speed: 15.0,
        created_at: timestamp,
        updated_at: timestamp,
    }
}

/// Creates a drone entity model with the given stored status string.
pub fn entity_with_status(status: &str) -> drone::Model {
    drone::Model {
        status: status.to_string(),
        ..entity()
    }
}
