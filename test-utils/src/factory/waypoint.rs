//! Waypoint factory for creating test waypoint entities.
//!
//! Waypoints belong to a drone, so every factory call takes the owning drone's ID.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// MAV_CMD_NAV_WAYPOINT
const DEFAULT_COMMAND: i32 = 16;

/// Factory for creating test waypoints with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::waypoint::WaypointFactory;
///
/// let waypoint = WaypointFactory::new(&db, drone.id)
///     .sequence_number(3)
///     .position(47.39, 8.54, 30.0)
///     .build()
///     .await?;
/// ```
pub struct WaypointFactory<'a> {
    db: &'a DatabaseConnection,
    drone_id: i32,
    sequence_number: i32,
    command: i32,
    latitude: f64,
    longitude: f64,
    altitude: f64,
    source_file: String,
    created_at: DateTime<Utc>,
}

impl<'a> WaypointFactory<'a> {
    /// Creates a new WaypointFactory with default values.
    ///
    /// Defaults:
    /// - sequence_number: `0`
    /// - command: `16` (navigate to waypoint)
    /// - position: `(0.0, 0.0, 50.0)`
    /// - source_file: `"factory.waypoints"`
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `drone_id` - ID of the drone owning this waypoint
    ///
    /// # Returns
    /// - `WaypointFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, drone_id: i32) -> Self {
        Self {
            db,
            drone_id,
            sequence_number: 0,
            command: DEFAULT_COMMAND,
            latitude: 0.0,
            longitude: 0.0,
            altitude: 50.0,
            source_file: "factory.waypoints".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn sequence_number(mut self, sequence_number: i32) -> Self {
        self.sequence_number = sequence_number;
        self
    }

    pub fn command(mut self, command: i32) -> Self {
        self.command = command;
        self
    }

    pub fn position(mut self, latitude: f64, longitude: f64, altitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self.altitude = altitude;
        self
    }

    pub fn source_file(mut self, source_file: impl Into<String>) -> Self {
        self.source_file = source_file.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the waypoint entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::waypoint::Model)` - Created waypoint entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::waypoint::Model, DbErr> {
        entity::waypoint::ActiveModel {
            drone_id: ActiveValue::Set(self.drone_id),
            sequence_number: ActiveValue::Set(self.sequence_number),
            command: ActiveValue::Set(self.command),
            param1: ActiveValue::Set(0.0),
            param2: ActiveValue::Set(0.0),
            param3: ActiveValue::Set(0.0),
            param4: ActiveValue::Set(0.0),
            latitude: ActiveValue::Set(self.latitude),
            longitude: ActiveValue::Set(self.longitude),
            altitude: ActiveValue::Set(self.altitude),
            auto_continue: ActiveValue::Set(true),
            source_file: ActiveValue::Set(self.source_file),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a waypoint with default values at the given sequence number.
///
/// # Arguments
/// - `db` - Database connection
/// - `drone_id` - ID of the owning drone
/// - `sequence_number` - Position of the waypoint within the mission
///
/// # Returns
/// - `Ok(entity::waypoint::Model)` - Created waypoint entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_waypoint(
    db: &DatabaseConnection,
    drone_id: i32,
    sequence_number: i32,
) -> Result<entity::waypoint::Model, DbErr> {
    WaypointFactory::new(db, drone_id)
        .sequence_number(sequence_number)
        .build()
        .await
}
